//! Metrics-index commands.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, FieldEffect, GrammarSupport, ParamType,
    RetainClass, SyntaxPattern, field_list, lit, param, seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::Metrics, syntax)
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        decl(
            "mstats",
            seq([
                param(ParamType::StatsFunc, "aggregations")
                    .with_effect(FieldEffect::Creates)
                    .one_or_more(),
                seq([lit("where"), param(ParamType::Str, "filter")]).optional(),
                seq([
                    lit("by"),
                    field_list("by_fields").with_effect(FieldEffect::GroupsBy),
                ])
                .optional(),
                opt_kv("span", param(ParamType::Str, "span")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            CommandSemantics::new()
                .drops_all_except([RetainClass::ByFields, RetainClass::Creates]),
        ),
        decl(
            "mcollect",
            seq([
                lit("index"),
                lit("="),
                param(ParamType::Str, "index"),
                field_list("fields")
                    .with_effect(FieldEffect::Consumes)
                    .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(CommandSemantics::new().preserves_all()),
        decl("meventcollect", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(CommandSemantics::new().preserves_all()),
        decl("mpreview", opaque_args())
            .with_alias("msearch")
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(CommandSemantics::new().drops_all_except([RetainClass::Creates])),
        decl("mcatalog", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(CommandSemantics::new().drops_all_except([RetainClass::Creates])),
    ]
}
