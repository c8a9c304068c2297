use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Rating {
    #[sea_orm(string_value = "ONE")]
    #[serde(rename = "ONE")]
    One,
    #[sea_orm(string_value = "TWO")]
    #[serde(rename = "TWO")]
    Two,
    #[sea_orm(string_value = "THREE")]
    #[serde(rename = "THREE")]
    Three,
    #[sea_orm(string_value = "FOUR")]
    #[serde(rename = "FOUR")]
    Four,
    #[sea_orm(string_value = "FIVE")]
    #[serde(rename = "FIVE")]
    Five,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub product_id: Uuid,
    pub review_text: String,
    pub rating: Rating,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
