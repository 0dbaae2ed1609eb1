//! Column definitions backed by a [`ChoiceEnum`].

use bazaar_domain::choice::ChoiceEnum;
use sea_orm_migration::prelude::*;

/// A column defaulting to the enum's first choice and checked against all of them.
pub fn choice_column<E, C>(column: C) -> ColumnDef
where
    E: ChoiceEnum,
    E::Value: Into<Value>,
    C: Iden + Clone + 'static,
{
    let default: Value = E::default_value().into();
    let mut def = choice_check::<E, C>(column);
    def.default(default);
    def
}

/// A nullable column whose non-null values must be members of the enum.
pub fn choice_check<E, C>(column: C) -> ColumnDef
where
    E: ChoiceEnum,
    E::Value: Into<Value>,
    C: Iden + Clone + 'static,
{
    let values: Vec<Value> = E::members().iter().map(|member| member.value().into()).collect();
    ColumnDef::new(column.clone())
        .check(Expr::col(column).is_in(values))
        .to_owned()
}
