//! Pipeline combinators. Subsearch bodies are parsed as their own
//! pipelines and analyzed separately; here they are opaque arguments, so
//! most of the module is `Partial`.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, FieldEffect, GrammarSupport, ParamType,
    StaticCreate, SyntaxPattern, field_list, param, seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::Pipeline, syntax)
}

fn preserves() -> CommandSemantics {
    CommandSemantics::new().preserves_all()
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        decl("append", param(ParamType::Str, "subsearch"))
            .with_grammar_support(GrammarSupport::Partial)
            .with_semantics(preserves()),
        decl("appendcols", param(ParamType::Str, "subsearch"))
            .with_grammar_support(GrammarSupport::Partial)
            .with_semantics(preserves()),
        decl("appendpipe", param(ParamType::Str, "subsearch"))
            .with_grammar_support(GrammarSupport::Partial)
            .with_semantics(preserves()),
        decl(
            "join",
            seq([
                opt_kv("type", param(ParamType::Str, "join_type")),
                opt_kv("max", param(ParamType::Int, "max")),
                field_list("fields")
                    .with_effect(FieldEffect::Consumes)
                    .optional(),
                param(ParamType::Str, "subsearch"),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl("union", param(ParamType::Str, "subsearch"))
            .with_grammar_support(GrammarSupport::Partial)
            .with_semantics(preserves()),
        decl(
            "map",
            seq([
                param(ParamType::Str, "subsearch"),
                opt_kv("maxsearches", param(ParamType::Int, "maxsearches")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl(
            "foreach",
            seq([
                field_list("fields").with_effect(FieldEffect::Consumes),
                param(ParamType::Str, "template"),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl("multisearch", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl(
            "selfjoin",
            seq([
                opt_kv("overwrite", param(ParamType::Bool, "overwrite")),
                field_list("fields").with_effect(FieldEffect::Consumes),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "transaction",
            seq([
                field_list("fields")
                    .with_effect(FieldEffect::GroupsBy)
                    .optional(),
                opt_kv("maxspan", param(ParamType::TimeModifier, "maxspan")),
                opt_kv("maxpause", param(ParamType::TimeModifier, "maxpause")),
                opt_kv("startswith", param(ParamType::Str, "startswith")),
                opt_kv("endswith", param(ParamType::Str, "endswith")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            preserves()
                .with_static_create(StaticCreate::new("duration"))
                .with_static_create(StaticCreate::new("eventcount")),
        ),
    ]
}
