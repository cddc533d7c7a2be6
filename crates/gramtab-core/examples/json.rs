// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Example demonstrating the parser runtime with a JSON-like grammar.
//!
//! This example registers the lexer patterns and rule table for a small
//! JSON dialect, then parses a few documents and prints the resulting
//! trees (or diagnostics).

use gramtab_core::error::ParseError;
use gramtab_core::lexis::Lexer;
use gramtab_core::syntax::{Grammar, Parser, Rule};

fn json_parser() -> Parser {
    let lexer = Lexer::new(
        [
            ("T_WS", r"[ \t\r\n]+"),
            ("T_TRUE", r"true"),
            ("T_FALSE", r"false"),
            ("T_NULL", r"null"),
            ("T_STRING", r#""(?:[^"\\]|\\.)*""#),
            (
                "T_NUMBER",
                r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?",
            ),
            ("T_LBRACE", r"\{"),
            ("T_RBRACE", r"\}"),
            ("T_LBRACKET", r"\["),
            ("T_RBRACKET", r"\]"),
            ("T_COLON", r":"),
            ("T_COMMA", r","),
        ],
        ["T_WS"],
    )
    .expect("patterns are valid");

    let grammar = Grammar::new([
        ("value", Rule::alternation(["object", "array", "scalar"])),
        (
            "scalar",
            Rule::alternation(["true", "false", "null", "string", "number"]),
        ),
        ("true", Rule::terminal("T_TRUE")),
        ("false", Rule::terminal("T_FALSE")),
        ("null", Rule::terminal("T_NULL")),
        ("string", Rule::terminal("T_STRING")),
        ("number", Rule::terminal("T_NUMBER")),
        ("lbrace", Rule::hidden("T_LBRACE")),
        ("rbrace", Rule::hidden("T_RBRACE")),
        ("lbracket", Rule::hidden("T_LBRACKET")),
        ("rbracket", Rule::hidden("T_RBRACKET")),
        ("colon", Rule::hidden("T_COLON")),
        ("comma", Rule::hidden("T_COMMA")),
        (
            "object",
            Rule::concat(["lbrace", "members", "rbrace"]).with_label("object"),
        ),
        ("members", Rule::optional("member_list")),
        ("member_list", Rule::concat(["pair", "member_tail"])),
        ("member_tail", Rule::repetition("member_tail_item", 0, None)),
        ("member_tail_item", Rule::concat(["comma", "pair"])),
        (
            "pair",
            Rule::concat(["string", "colon", "value"]).with_label("pair"),
        ),
        (
            "array",
            Rule::concat(["lbracket", "elements", "rbracket"]).with_label("array"),
        ),
        ("elements", Rule::optional("element_list")),
        ("element_list", Rule::concat(["value", "element_tail"])),
        ("element_tail", Rule::repetition("element_tail_item", 0, None)),
        ("element_tail_item", Rule::concat(["comma", "value"])),
    ])
    .expect("grammar is valid");

    Parser::new(lexer, grammar)
}

fn main() {
    let parser = json_parser();

    let documents = [
        r#"{"name": "gramtab", "tags": ["parser", "runtime"], "stable": false}"#,
        r"[1, 2, 3]",
        r"{",
        r"@",
    ];

    // Allow trying other documents from the command line.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let documents: Vec<&str> = if args.is_empty() {
        documents.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for document in documents {
        println!("source: {document}");
        match parser.parse(document) {
            Ok(tree) => println!("  tree:  {tree}"),
            Err(ParseError::UnexpectedToken { token, .. }) => {
                println!("  error: unexpected token {token} at byte {}", token.offset());
            }
            Err(error) => println!("  error: {error}"),
        }
        println!();
    }
}
