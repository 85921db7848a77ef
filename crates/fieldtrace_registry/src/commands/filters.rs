//! Row filters. These drop events, never fields, so the whole module
//! preserves the field set; what varies is which fields each filter reads.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, FieldEffect, GrammarSupport, ParamType,
    StaticCreate, SyntaxPattern, field, field_list, lit, param, seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::Filters, syntax)
}

fn preserves() -> CommandSemantics {
    CommandSemantics::new().preserves_all()
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        // Search expressions reference fields positionally inside opaque
        // boolean terms; the parser does not break them out into properties.
        decl("search", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl("where", param(ParamType::Str, "expression"))
            .with_grammar_support(GrammarSupport::Partial)
            .with_semantics(preserves()),
        decl(
            "dedup",
            seq([
                param(ParamType::Int, "count").optional(),
                field_list("fields").with_effect(FieldEffect::Consumes),
                seq([
                    lit("sortby"),
                    field_list("sort_fields").with_effect(FieldEffect::Consumes),
                ])
                .optional(),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "head",
            seq([
                param(ParamType::Int, "count").optional(),
                param(ParamType::Str, "expression").optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl("tail", param(ParamType::Int, "count").optional())
            .with_semantics(preserves()),
        decl(
            "regex",
            seq([
                field("field").with_effect(FieldEffect::Consumes).optional(),
                param(ParamType::Str, "pattern"),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl("uniq", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl(
            "anomalydetection",
            seq([
                opt_kv("method", param(ParamType::Str, "method")),
                opt_kv("action", param(ParamType::Str, "action")),
                field_list("fields")
                    .with_effect(FieldEffect::Consumes)
                    .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            preserves().with_static_create(StaticCreate::new("probable_cause")),
        ),
        decl(
            "anomalousvalue",
            seq([
                opt_kv("action", param(ParamType::Str, "action")),
                opt_kv("pthresh", param(ParamType::Num, "pthresh")),
                field_list("fields")
                    .with_effect(FieldEffect::Consumes)
                    .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl(
            "cluster",
            seq([
                opt_kv("t", param(ParamType::Num, "t")),
                opt_kv("showcount", param(ParamType::Bool, "showcount")),
                opt_kv("field", field("field").with_effect(FieldEffect::Consumes)),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            preserves()
                .with_static_create(StaticCreate::new("cluster_count"))
                .with_static_create(StaticCreate::new("cluster_label")),
        ),
        decl(
            "kmeans",
            seq([
                opt_kv("k", param(ParamType::Int, "k")),
                field_list("fields")
                    .with_effect(FieldEffect::Consumes)
                    .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            preserves().with_static_create(StaticCreate::new("CLUSTERNUM")),
        ),
        decl("delete", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
    ]
}
