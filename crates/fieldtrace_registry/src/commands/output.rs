//! Output sinks. Results flow through unchanged, so everything here
//! preserves the field set.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, GrammarSupport, ParamType, SyntaxPattern,
    lit, param, seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::Output, syntax)
}

fn preserves() -> CommandSemantics {
    CommandSemantics::new().preserves_all()
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        decl(
            "outputlookup",
            seq([
                opt_kv("append", param(ParamType::Bool, "append")),
                opt_kv("create_empty", param(ParamType::Bool, "create_empty")),
                param(ParamType::Str, "table"),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "outputcsv",
            seq([
                opt_kv("append", param(ParamType::Bool, "append")),
                opt_kv("singlefile", param(ParamType::Bool, "singlefile")),
                param(ParamType::Str, "filename").optional(),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "collect",
            seq([
                lit("index"),
                lit("="),
                param(ParamType::Str, "index"),
                opt_kv("sourcetype", param(ParamType::Str, "sourcetype")),
                opt_kv("addtime", param(ParamType::Bool, "addtime")),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "sendemail",
            seq([
                lit("to"),
                lit("="),
                param(ParamType::Str, "to"),
                opt_kv("subject", param(ParamType::Str, "subject")),
                opt_kv("format", param(ParamType::Str, "format")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl(
            "tscollect",
            seq([
                opt_kv("namespace", param(ParamType::Str, "namespace")),
                opt_kv("squashcase", param(ParamType::Bool, "squashcase")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl("outputtelemetry", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
    ]
}
