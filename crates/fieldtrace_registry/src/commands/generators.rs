//! Event-generating commands. These start a pipeline (or replace its
//! results), so the narrowing ones keep nothing but what they create.

use fieldtrace_syntax::{
    CommandCategory, CommandSemantics, CommandSyntax, FieldEffect, GrammarSupport, ParamType,
    RetainClass, StaticCreate, SyntaxPattern, field_list, lit, param, seq,
};

use super::{opaque_args, opt_kv};

fn decl(name: &str, syntax: SyntaxPattern) -> CommandSyntax {
    CommandSyntax::new(name, CommandCategory::Generators, syntax)
}

fn generates() -> CommandSemantics {
    CommandSemantics::new().drops_all_except([RetainClass::Creates])
}

pub(crate) fn declarations() -> Vec<CommandSyntax> {
    vec![
        decl(
            "makeresults",
            seq([
                opt_kv("count", param(ParamType::Int, "count")),
                opt_kv("annotate", param(ParamType::Bool, "annotate")),
            ]),
        )
        .with_semantics(generates().with_static_create(StaticCreate::new("_time"))),
        decl(
            "inputlookup",
            seq([
                opt_kv("append", param(ParamType::Bool, "append")),
                opt_kv("start", param(ParamType::Int, "start")),
                opt_kv("max", param(ParamType::Int, "max")),
                param(ParamType::Str, "table"),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(generates()),
        decl(
            "inputcsv",
            seq([
                opt_kv("append", param(ParamType::Bool, "append")),
                param(ParamType::Str, "filename"),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(generates()),
        decl(
            "tstats",
            seq([
                param(ParamType::StatsFunc, "aggregations")
                    .with_effect(FieldEffect::Creates)
                    .one_or_more(),
                seq([lit("from"), param(ParamType::Str, "datamodel")]).optional(),
                seq([lit("where"), param(ParamType::Str, "filter")]).optional(),
                seq([
                    lit("by"),
                    field_list("by_fields").with_effect(FieldEffect::GroupsBy),
                ])
                .optional(),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(
            CommandSemantics::new()
                .drops_all_except([RetainClass::ByFields, RetainClass::Creates]),
        ),
        decl(
            "eventcount",
            seq([
                opt_kv("index", param(ParamType::Str, "index")),
                opt_kv("summarize", param(ParamType::Bool, "summarize")),
            ]),
        )
        .with_grammar_support(GrammarSupport::Partial)
        .with_semantics(generates().with_static_create(StaticCreate::new("count"))),
        decl(
            "gentimes",
            seq([
                lit("start"),
                lit("="),
                param(ParamType::TimeModifier, "start"),
                opt_kv("end", param(ParamType::TimeModifier, "end")),
                opt_kv("increment", param(ParamType::TimeModifier, "increment")),
            ]),
        )
        .with_semantics(
            generates()
                .with_static_create(StaticCreate::new("starttime"))
                .with_static_create(StaticCreate::new("endtime"))
                .with_static_create(StaticCreate::new("starthuman"))
                .with_static_create(StaticCreate::new("endhuman")),
        ),
        decl("loadjob", param(ParamType::Str, "sid"))
            .with_grammar_support(GrammarSupport::Partial)
            .with_semantics(generates()),
        decl("savedsearch", param(ParamType::Str, "name"))
            .with_grammar_support(GrammarSupport::Partial)
            .with_semantics(generates()),
        decl("datamodel", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(generates()),
        decl("dbinspect", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(generates()),
        decl("rest", param(ParamType::Str, "uri"))
            .with_grammar_support(GrammarSupport::Partial)
            .with_semantics(generates()),
        decl("pivot", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(generates()),
        decl("typeahead", opaque_args())
            .with_grammar_support(GrammarSupport::Recognized)
            .with_semantics(generates()),
    ]
}
