//! Commands that fit no other category.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, FieldEffect, GrammarSupport, ParamType,
    RetainClass, StaticCreate, SyntaxPattern, field, lit, param, seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::Misc, syntax)
}

fn preserves() -> CommandSemantics {
    CommandSemantics::new().preserves_all()
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        decl("highlight", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl(
            "format",
            seq([
                opt_kv("mvsep", param(ParamType::Str, "mvsep")),
                opt_kv("maxresults", param(ParamType::Int, "maxresults")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            CommandSemantics::new()
                .drops_all_except([RetainClass::Creates])
                .with_static_create(StaticCreate::new("search")),
        ),
        decl("history", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(CommandSemantics::new().drops_all_except([RetainClass::Creates])),
        decl("localize", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl("localop", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl("noop", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl("typer", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves().with_static_create(StaticCreate::new("eventtype"))),
        decl("typelearner", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl(
            "analyzefields",
            seq([
                lit("classfield"),
                lit("="),
                field("classfield").with_effect(FieldEffect::Consumes),
            ]),
        )
        .with_alias("af")
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(CommandSemantics::new().drops_all_except([RetainClass::Creates])),
        decl("audit", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves()),
        decl("reltime", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(preserves().with_static_create(StaticCreate::new("reltime"))),
        decl(
            "abstract",
            seq([
                opt_kv("maxterms", param(ParamType::Int, "maxterms")),
                opt_kv("maxlines", param(ParamType::Int, "maxlines")),
            ]),
        )
        .with_semantics(preserves()),
        decl(
            "diff",
            seq([
                opt_kv("position1", param(ParamType::Int, "position1")),
                opt_kv("position2", param(ParamType::Int, "position2")),
                opt_kv("attribute", field("attribute").with_effect(FieldEffect::Consumes)),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(CommandSemantics::new().drops_all_except([RetainClass::Creates])),
        decl(
            "concurrency",
            seq([
                opt_kv("duration", field("duration").with_effect(FieldEffect::Consumes)),
                opt_kv("start", field("start").with_effect(FieldEffect::Consumes)),
            ]),
        )
        .with_semantics(
            preserves().with_static_create(
                StaticCreate::new("concurrency").with_depends_on(["duration", "start"]),
            ),
        ),
        decl(
            "predict",
            seq([
                field("field").with_effect(FieldEffect::Consumes),
                seq([
                    lit("as"),
                    field("alias")
                        .with_effect(FieldEffect::Creates)
                        .with_depends_on(["field"]),
                ])
                .optional(),
                opt_kv("algorithm", param(ParamType::Str, "algorithm")),
                opt_kv("future_timespan", param(ParamType::Int, "future_timespan")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            preserves().with_static_create(
                StaticCreate::new("prediction").with_depends_on(["field"]),
            ),
        ),
        decl(
            "trendline",
            seq([
                param(ParamType::Str, "trendtype"),
                lit("("),
                field("field").with_effect(FieldEffect::Consumes),
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
        )
        .with_semantics(preserves()),
        decl(
            "x11",
            seq([
                param(ParamType::Str, "type"),
                lit("("),
                field("field").with_effect(FieldEffect::Consumes),
                lit(")"),
                seq([
                    lit("as"),
                    field("alias")
                        .with_effect(FieldEffect::Creates)
                        .with_depends_on(["field"]),
                ])
                .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(preserves()),
    ]
}
