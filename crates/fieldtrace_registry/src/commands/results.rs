//! Result reshaping: projection, renaming, ordering, and pivot-style
//! transforms.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, FieldEffect, GrammarSupport, ParamType,
    RetainClass, StaticCreate, SyntaxPattern, alt, field, field_list, lit, param, seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::Results, syntax)
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        decl(
            "table",
            field_list("fields").with_effect(FieldEffect::Consumes),
        )
        .with_semantics(CommandSemantics::new().drops_all_except([RetainClass::Consumes])),
        // Keep mode narrows to the listed fields; drop mode removes them.
        // The survival rule is per-occurrence, so it lives in the buckets
        // (consumes vs drops), not in command-level semantics.
        decl(
            "fields",
            alt([
                seq([
                    lit("-"),
                    field_list("removed").with_effect(FieldEffect::Drops),
                ]),
                seq([
                    lit("+").optional(),
                    field_list("kept").with_effect(FieldEffect::Consumes),
                ]),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial),
        decl(
            "rename",
            seq([
                param(ParamType::WcField, "source").with_effect(FieldEffect::Drops),
                lit("as"),
                param(ParamType::WcField, "target")
                    .with_effect(FieldEffect::Creates)
                    .with_depends_on(["source"]),
            ])
            .one_or_more(),
        )
        .with_semantics(CommandSemantics::new().preserves_all()),
        decl(
            "sort",
            seq([
                param(ParamType::Int, "count").optional(),
                field_list("sort_fields").with_effect(FieldEffect::Consumes),
            ]),
        )
        .with_semantics(CommandSemantics::new().preserves_all()),
        decl("reverse", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(CommandSemantics::new().preserves_all()),
        decl(
            "transpose",
            seq([
                param(ParamType::Int, "count").optional(),
                opt_kv("column_name", param(ParamType::Str, "column_name")),
                opt_kv("header_field", field("header_field").with_effect(FieldEffect::Consumes)),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            CommandSemantics::new()
                .drops_all_except([RetainClass::Creates])
                .with_static_create(StaticCreate::new("column")),
        ),
        decl(
            "xyseries",
            seq([
                field("x_field").with_effect(FieldEffect::GroupsBy),
                field("y_name_field").with_effect(FieldEffect::Consumes),
                field_list("y_data_fields").with_effect(FieldEffect::Consumes),
            ]),
        )
        .with_alias("maketable")
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            CommandSemantics::new().drops_all_except([RetainClass::ByFields, RetainClass::Creates]),
        ),
        decl(
            "untable",
            seq([
                field("x_field").with_effect(FieldEffect::GroupsBy),
                field("key_field").with_effect(FieldEffect::Creates),
                field("value_field").with_effect(FieldEffect::Creates),
            ]),
        )
        .with_semantics(
            CommandSemantics::new().drops_all_except([RetainClass::ByFields, RetainClass::Creates]),
        ),
        decl(
            "fieldformat",
            seq([
                field("target")
                    .with_effect(FieldEffect::Modifies)
                    .with_depends_on_expression("expression"),
                lit("="),
                param(ParamType::Str, "expression"),
            ]),
        )
        .with_semantics(CommandSemantics::new().preserves_all()),
        decl(
            "fieldsummary",
            seq([
                opt_kv("maxvals", param(ParamType::Int, "maxvals")),
                field_list("fields")
                    .with_effect(FieldEffect::Consumes)
                    .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            CommandSemantics::new()
                .drops_all_except([RetainClass::Creates])
                .with_static_create(StaticCreate::new("field"))
                .with_static_create(StaticCreate::new("count"))
                .with_static_create(StaticCreate::new("distinct_count")),
        ),
    ]
}
