//! Aggregating and reporting commands.
//!
//! These are the narrowing commands: after `stats` or `chart` only the
//! grouping keys and the aggregation outputs remain, which is why the
//! whole family carries a `drops_all_except` rule. `eventstats` and
//! `streamstats` share the `stats` grammar but enrich instead of narrowing,
//! so they override the base rule per variant.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, FieldEffect, GrammarSupport, ParamType,
    RetainClass, SemanticsOverride, StaticCreate, SyntaxPattern, field, field_list, lit, param,
    seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::Aggregation, syntax)
}

fn narrows() -> CommandSemantics {
    CommandSemantics::new().drops_all_except([RetainClass::ByFields, RetainClass::Creates])
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        decl(
            "stats",
            seq([
                param(ParamType::StatsFunc, "aggregations")
                    .with_effect(FieldEffect::Creates)
                    .one_or_more(),
                seq([
                    lit("by"),
                    field_list("by_fields").with_effect(FieldEffect::GroupsBy),
                ])
                .optional(),
            ]),
        )
        .with_variant("eventstats")
        .with_variant("streamstats")
        .with_semantics(
            narrows()
                .with_variant("eventstats", SemanticsOverride::new().preserves_all())
                .with_variant("streamstats", SemanticsOverride::new().preserves_all()),
        ),
        decl(
            "chart",
            seq([
                param(ParamType::StatsFunc, "aggregations")
                    .with_effect(FieldEffect::Creates)
                    .one_or_more(),
                seq([
                    lit("over"),
                    field("over_field").with_effect(FieldEffect::GroupsBy),
                ])
                .optional(),
                seq([
                    lit("by"),
                    field_list("by_fields").with_effect(FieldEffect::GroupsBy),
                ])
                .optional(),
            ]),
        )
        .with_variant("timechart")
        .with_semantics(narrows()),
        decl(
            "top",
            seq([
                opt_kv("limit", param(ParamType::Int, "limit")),
                field_list("fields").with_effect(FieldEffect::GroupsBy),
                seq([
                    lit("by"),
                    field_list("by_fields").with_effect(FieldEffect::GroupsBy),
                ])
                .optional(),
            ]),
        )
        .with_variant("rare")
        .with_semantics(
            narrows()
                .with_static_create(StaticCreate::new("count").with_depends_on(["fields"]))
                .with_static_create(StaticCreate::new("percent").with_depends_on(["fields"])),
        ),
        decl(
            "addtotals",
            seq([
                opt_kv("row", param(ParamType::Bool, "row")),
                opt_kv("col", param(ParamType::Bool, "col")),
                opt_kv("fieldname", field("fieldname").with_effect(FieldEffect::Creates)),
                field_list("fields")
                    .with_effect(FieldEffect::Consumes)
                    .optional(),
            ]),
        )
        .with_semantics(
            CommandSemantics::new()
                .preserves_all()
                .with_static_create(StaticCreate::new("Total").with_depends_on(["fields"])),
        ),
        decl(
            "addcoltotals",
            seq([
                opt_kv("labelfield", field("labelfield").with_effect(FieldEffect::Creates)),
                opt_kv("label", param(ParamType::Str, "label")),
                field_list("fields")
                    .with_effect(FieldEffect::Consumes)
                    .optional(),
            ]),
        )
        .with_semantics(CommandSemantics::new().preserves_all()),
        decl(
            "contingency",
            seq([
                field("row_field").with_effect(FieldEffect::GroupsBy),
                field("column_field").with_effect(FieldEffect::GroupsBy),
            ]),
        )
        .with_semantics(narrows()),
        decl(
            "associate",
            field_list("fields")
                .with_effect(FieldEffect::Consumes)
                .optional(),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(CommandSemantics::new().drops_all_except([RetainClass::Creates])),
        decl(
            "geostats",
            seq([
                opt_kv("latfield", field("latfield").with_effect(FieldEffect::Consumes)),
                opt_kv("longfield", field("longfield").with_effect(FieldEffect::Consumes)),
                param(ParamType::StatsFunc, "aggregations")
                    .with_effect(FieldEffect::Creates)
                    .one_or_more(),
                seq([
                    lit("by"),
                    field_list("by_fields").with_effect(FieldEffect::GroupsBy),
                ])
                .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(narrows()),
        decl(
            "timewrap",
            seq([
                param(ParamType::TimeModifier, "span"),
                opt_kv("series", param(ParamType::Str, "series")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(CommandSemantics::new().preserves_all()),
        decl("sistats", opaque_args())
            .with_variant("sichart")
            .with_variant("sitimechart")
            .with_variant("sitop")
            .with_variant("sirare")
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(narrows()),
    ]
}
