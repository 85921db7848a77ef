//! Commands that rewrite existing fields in place.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, FieldEffect, GrammarSupport, ParamType,
    SyntaxPattern, field, field_list, lit, param, seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::FieldModifiers, syntax)
}

fn preserves() -> CommandSemantics {
    CommandSemantics::new().preserves_all()
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        decl(
            "bin",
            seq([
                opt_kv("span", param(ParamType::Str, "span")),
                opt_kv("minspan", param(ParamType::Str, "minspan")),
                opt_kv("bins", param(ParamType::Int, "bins")),
                field("field").with_effect(FieldEffect::Modifies),
                seq([
                    lit("as"),
                    field("alias")
                        .with_effect(FieldEffect::Creates)
                        .with_depends_on(["field"]),
                ])
                .optional(),
            ]),
        )
        .with_alias("bucket")
        .with_semantics(preserves()),
        decl(
            "convert",
            seq([
                opt_kv("timeformat", param(ParamType::Str, "timeformat")),
                seq([
                    param(ParamType::Str, "function"),
                    lit("("),
                    field("field").with_effect(FieldEffect::Modifies),
                    lit(")"),
                    seq([
                        lit("as"),
                        field("alias")
                            .with_effect(FieldEffect::Creates)
                            .with_depends_on(["field"]),
                    ])
                    .optional(),
                ])
                .one_or_more(),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "fillnull",
            seq([
                opt_kv("value", param(ParamType::Str, "value")),
                field_list("fields")
                    .with_effect(FieldEffect::Modifies)
                    .optional(),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "filldown",
            field_list("fields")
                .with_effect(FieldEffect::Modifies)
                .optional(),
        )
        .with_semantics(preserves()),
        decl(
            "makemv",
            seq([
                opt_kv("delim", param(ParamType::Str, "delim")),
                opt_kv("tokenizer", param(ParamType::Str, "tokenizer")),
                field("field").with_effect(FieldEffect::Modifies),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "mvcombine",
            seq([
                opt_kv("delim", param(ParamType::Str, "delim")),
                field("field").with_effect(FieldEffect::Modifies),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "mvexpand",
            seq([
                field("field").with_effect(FieldEffect::Modifies),
                opt_kv("limit", param(ParamType::Int, "limit")),
            ]),
        )
        .with_semantics(preserves()),
        decl("nomv", field("field").with_effect(FieldEffect::Modifies))
            .with_semantics(preserves()),
        decl(
            "replace",
            seq([
                seq([
                    param(ParamType::Str, "from"),
                    lit("with"),
                    param(ParamType::Str, "to"),
                ])
                .one_or_more(),
                seq([
                    lit("in"),
                    field_list("fields").with_effect(FieldEffect::Modifies),
                ])
                .optional(),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "outlier",
            seq([
                opt_kv("action", param(ParamType::Str, "action")),
                opt_kv("param", param(ParamType::Num, "param")),
                field_list("fields")
                    .with_effect(FieldEffect::Modifies)
                    .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl(
            "bucketdir",
            seq([
                opt_kv("pathfield", field("pathfield").with_effect(FieldEffect::Modifies)),
                opt_kv("maxcount", param(ParamType::Int, "maxcount")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
        decl(
            "setfields",
            seq([
                field("target").with_effect(FieldEffect::Creates),
                lit("="),
                param(ParamType::Str, "value"),
            ])
            .one_or_more(),
        )
        .with_semantics(preserves()),
        decl("scrub", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl(
            "makecontinuous",
            seq([
                opt_kv("span", param(ParamType::Str, "span")),
                field("field").with_effect(FieldEffect::Modifies).optional(),
            ]),
        )
        .with_semantics(preserves()),
    ]
}
