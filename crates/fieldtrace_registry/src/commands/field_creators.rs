//! Commands that introduce new fields.
//!
//! Extraction commands (`rex`, `extract`, `spath` without an explicit
//! output) produce fields whose names only exist at runtime, so several
//! declarations here are `Partial`: they model the lineage-relevant clauses
//! and leave the extracted names opaque.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, FieldEffect, GrammarSupport, ParamType,
    StaticCreate, SyntaxPattern, field, field_list, lit, param, seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::FieldCreators, syntax)
}

fn preserves() -> CommandSemantics {
    CommandSemantics::new().preserves_all()
}

/// `field [as alias]` where the bare form modifies the field in place and
/// the aliased form writes a new field computed from it. Shared by the
/// running-computation commands (`accum`, `delta`, `autoregress`).
fn source_as_alias() -> SyntaxPattern {
    seq([
        field("field").with_effect(FieldEffect::Modifies),
        seq([
            lit("as"),
            field("alias")
                .with_effect(FieldEffect::Creates)
                .with_depends_on(["field"]),
        ])
        .optional(),
    ])
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        decl(
            "eval",
            seq([
                param(ParamType::EvaledField, "target")
                    .with_effect(FieldEffect::Creates)
                    .with_depends_on_expression("expression"),
                lit("="),
                param(ParamType::Str, "expression"),
            ])
            .one_or_more(),
        )
        .with_semantics(preserves()),
        decl(
            "lookup",
            seq([
                param(ParamType::Str, "table"),
                field_list("match_fields").with_effect(FieldEffect::Consumes),
                seq([
                    lit("output"),
                    field_list("output_fields")
                        .with_effect(FieldEffect::Creates)
                        .with_depends_on(["match_fields"]),
                ])
                .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl(
            "rex",
            seq([
                opt_kv("field", field("field").with_effect(FieldEffect::Consumes)),
                opt_kv("mode", param(ParamType::Str, "mode")),
                param(ParamType::Str, "pattern"),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl(
            "erex",
            seq([
                field("target").with_effect(FieldEffect::Creates),
                opt_kv("fromfield", field("fromfield").with_effect(FieldEffect::Consumes)),
                opt_kv("examples", param(ParamType::Str, "examples")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl(
            "spath",
            seq([
                opt_kv("input", field("input").with_effect(FieldEffect::Consumes)),
                opt_kv(
                    "output",
                    field("output")
                        .with_effect(FieldEffect::Creates)
                        .with_depends_on(["input"]),
                ),
                opt_kv("path", param(ParamType::Str, "path")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl(
            "strcat",
            seq([
                field_list("sources").with_effect(FieldEffect::Consumes),
                field("dest")
                    .with_effect(FieldEffect::Creates)
                    .with_depends_on(["sources"]),
            ]),
        )
        .with_semantics(preserves()),
        decl("accum", source_as_alias()).with_semantics(preserves()),
        decl(
            "delta",
            seq([source_as_alias(), opt_kv("p", param(ParamType::Int, "p"))]),
        )
        .with_semantics(preserves()),
        decl(
            "autoregress",
            seq([source_as_alias(), opt_kv("p", param(ParamType::Int, "p"))]),
        )
        .with_semantics(preserves()),
        decl(
            "rangemap",
            seq([
                lit("field"),
                lit("="),
                field("field").with_effect(FieldEffect::Consumes),
                opt_kv("default", param(ParamType::Str, "default")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            preserves().with_static_create(StaticCreate::new("range").with_depends_on(["field"])),
        ),
        decl(
            "iplocation",
            seq([
                opt_kv("prefix", param(ParamType::Str, "prefix")),
                opt_kv("allfields", param(ParamType::Bool, "allfields")),
                field("field").with_effect(FieldEffect::Consumes),
            ]),
        )
        .with_semantics(
            preserves()
                .with_static_create(StaticCreate::new("City").with_depends_on(["field"]))
                .with_static_create(StaticCreate::new("Country").with_depends_on(["field"]))
                .with_static_create(StaticCreate::new("Region").with_depends_on(["field"]))
                .with_static_create(StaticCreate::new("lat").with_depends_on(["field"]))
                .with_static_create(StaticCreate::new("lon").with_depends_on(["field"])),
        ),
        decl(
            "xpath",
            seq([
                param(ParamType::Str, "xpath"),
                opt_kv("field", field("field").with_effect(FieldEffect::Consumes)),
                opt_kv(
                    "outfield",
                    field("outfield")
                        .with_effect(FieldEffect::Creates)
                        .with_depends_on(["field"]),
                ),
            ]),
        )
        .with_semantics(preserves()),
        decl("addinfo", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(
                preserves()
                    .with_static_create(StaticCreate::new("info_min_time"))
                    .with_static_create(StaticCreate::new("info_max_time"))
                    .with_static_create(StaticCreate::new("info_search_time"))
                    .with_static_create(StaticCreate::new("info_sid")),
            ),
        decl("relevancy", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves().with_static_create(StaticCreate::new("relevancy"))),
        decl(
            "tags",
            seq([
                opt_kv(
                    "outputfield",
                    field("outputfield").with_effect(FieldEffect::Creates),
                ),
                field_list("fields")
                    .with_effect(FieldEffect::Consumes)
                    .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl("extract", opaque_args())
            .with_alias("kv")
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl("xmlkv", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl("kvform", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl("multikv", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
    ]
}
