//! Built-in language profiles
//!
//! Node kinds follow the tree-sitter grammars pinned in Cargo.toml.
//!
//! @module lang/profiles

use super::profile::{ClosingStyle, CommentStyle, LoopBinding, ProfileSpec};
use super::LanguageId;

// =============================================================================
// GRAMMARS
// =============================================================================

fn cpp_grammar() -> tree_sitter::Language {
    tree_sitter_cpp::LANGUAGE.into()
}

fn java_grammar() -> tree_sitter::Language {
    tree_sitter_java::LANGUAGE.into()
}

fn javascript_grammar() -> tree_sitter::Language {
    tree_sitter_javascript::LANGUAGE.into()
}

fn typescript_grammar() -> tree_sitter::Language {
    tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
}

fn python_grammar() -> tree_sitter::Language {
    tree_sitter_python::LANGUAGE.into()
}

fn csharp_grammar() -> tree_sitter::Language {
    tree_sitter_c_sharp::LANGUAGE.into()
}

fn go_grammar() -> tree_sitter::Language {
    tree_sitter_go::LANGUAGE.into()
}

fn ruby_grammar() -> tree_sitter::Language {
    tree_sitter_ruby::LANGUAGE.into()
}

fn php_grammar() -> tree_sitter::Language {
    tree_sitter_php::LANGUAGE_PHP.into()
}

fn rust_grammar() -> tree_sitter::Language {
    tree_sitter_rust::LANGUAGE.into()
}

const C_COMMENTS: CommentStyle = CommentStyle {
    line: &["//"],
    block: &[("/*", "*/")],
};

const HASH_COMMENTS: CommentStyle = CommentStyle {
    line: &["#"],
    block: &[],
};

// =============================================================================
// C-FAMILY
// =============================================================================

pub(super) static CPP: ProfileSpec = ProfileSpec {
    id: LanguageId::Cpp,
    extensions: &["c", "h", "cc", "cpp", "cxx", "hpp", "hh", "hxx"],
    grammar: cpp_grammar,
    function: &["function_definition", "lambda_expression"],
    block: &["compound_statement"],
    key: &[
        "assignment_expression",
        "update_expression",
        "declaration",
        "call_expression",
        "if_statement",
        "return_statement",
        "for_statement",
        "for_range_loop",
        "while_statement",
    ],
    ident: &["identifier", "field_identifier"],
    member: &["field_expression", "qualified_identifier"],
    assign: &["assignment_expression", "update_expression"],
    declaration: &["declaration", "init_declarator"],
    call: &["call_expression"],
    looping: &["for_statement", "for_range_loop"],
    control: &[
        "if_statement",
        "for_statement",
        "for_range_loop",
        "while_statement",
        "do_statement",
        "switch_statement",
    ],
    loop_binding: LoopBinding {
        fields: &["initializer", "declarator"],
        clauses: &[],
        after_token: None,
    },
    comments: C_COMMENTS,
    closing: ClosingStyle::Brace,
};

pub(super) static JAVA: ProfileSpec = ProfileSpec {
    id: LanguageId::Java,
    extensions: &["java"],
    grammar: java_grammar,
    function: &[
        "method_declaration",
        "constructor_declaration",
        "lambda_expression",
    ],
    block: &["block", "constructor_body"],
    key: &[
        "assignment_expression",
        "update_expression",
        "local_variable_declaration",
        "method_invocation",
        "object_creation_expression",
        "if_statement",
        "return_statement",
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
    ],
    ident: &["identifier"],
    member: &["field_access", "method_invocation"],
    assign: &["assignment_expression", "update_expression"],
    declaration: &["local_variable_declaration", "variable_declarator"],
    call: &["method_invocation", "object_creation_expression"],
    looping: &["for_statement", "enhanced_for_statement"],
    control: &[
        "if_statement",
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
        "do_statement",
        "switch_expression",
    ],
    loop_binding: LoopBinding {
        fields: &["init", "name"],
        clauses: &[],
        after_token: None,
    },
    comments: C_COMMENTS,
    closing: ClosingStyle::Brace,
};

pub(super) static CSHARP: ProfileSpec = ProfileSpec {
    id: LanguageId::CSharp,
    extensions: &["cs"],
    grammar: csharp_grammar,
    function: &[
        "method_declaration",
        "constructor_declaration",
        "local_function_statement",
        "lambda_expression",
    ],
    block: &["block"],
    key: &[
        "assignment_expression",
        "local_declaration_statement",
        "invocation_expression",
        "if_statement",
        "return_statement",
        "for_statement",
        "foreach_statement",
        "while_statement",
    ],
    ident: &["identifier"],
    member: &["member_access_expression"],
    assign: &["assignment_expression"],
    declaration: &[
        "local_declaration_statement",
        "variable_declaration",
        "variable_declarator",
    ],
    call: &["invocation_expression", "object_creation_expression"],
    looping: &["for_statement", "foreach_statement"],
    control: &[
        "if_statement",
        "for_statement",
        "foreach_statement",
        "while_statement",
        "do_statement",
        "switch_statement",
    ],
    loop_binding: LoopBinding {
        fields: &["initializer", "left"],
        clauses: &[],
        after_token: None,
    },
    comments: C_COMMENTS,
    closing: ClosingStyle::Brace,
};

pub(super) static GO: ProfileSpec = ProfileSpec {
    id: LanguageId::Go,
    extensions: &["go"],
    grammar: go_grammar,
    function: &["function_declaration", "method_declaration", "func_literal"],
    block: &["block"],
    key: &[
        "assignment_statement",
        "short_var_declaration",
        "var_declaration",
        "inc_statement",
        "dec_statement",
        "call_expression",
        "if_statement",
        "return_statement",
        "for_statement",
    ],
    ident: &["identifier", "field_identifier"],
    member: &["selector_expression"],
    assign: &["assignment_statement"],
    declaration: &["short_var_declaration", "var_declaration", "var_spec"],
    call: &["call_expression"],
    looping: &["for_statement"],
    control: &[
        "if_statement",
        "for_statement",
        "expression_switch_statement",
        "type_switch_statement",
        "select_statement",
    ],
    loop_binding: LoopBinding {
        fields: &[],
        clauses: &[("range_clause", "left"), ("for_clause", "initializer")],
        after_token: None,
    },
    comments: C_COMMENTS,
    closing: ClosingStyle::Brace,
};

pub(super) static RUST: ProfileSpec = ProfileSpec {
    id: LanguageId::Rust,
    extensions: &["rs"],
    grammar: rust_grammar,
    function: &["function_item", "closure_expression"],
    block: &["block"],
    key: &[
        "let_declaration",
        "assignment_expression",
        "compound_assignment_expr",
        "call_expression",
        "macro_invocation",
        "if_expression",
        "return_expression",
        "for_expression",
        "while_expression",
    ],
    ident: &["identifier", "field_identifier"],
    member: &["field_expression", "scoped_identifier"],
    assign: &["assignment_expression", "compound_assignment_expr"],
    declaration: &["let_declaration"],
    call: &["call_expression", "macro_invocation"],
    looping: &["for_expression"],
    control: &[
        "if_expression",
        "for_expression",
        "while_expression",
        "loop_expression",
        "match_expression",
    ],
    loop_binding: LoopBinding {
        fields: &["pattern"],
        clauses: &[],
        after_token: None,
    },
    comments: C_COMMENTS,
    closing: ClosingStyle::Brace,
};

// =============================================================================
// JAVASCRIPT / TYPESCRIPT
// =============================================================================

const JS_FUNCTIONS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "function",
    "generator_function_declaration",
    "method_definition",
    "arrow_function",
];

const JS_KEYS: &[&str] = &[
    "assignment_expression",
    "augmented_assignment_expression",
    "update_expression",
    "variable_declaration",
    "lexical_declaration",
    "call_expression",
    "if_statement",
    "return_statement",
    "for_statement",
    "for_in_statement",
    "while_statement",
];

const JS_IDENTS: &[&str] = &[
    "identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
    "property_identifier",
];

const JS_CONTROLS: &[&str] = &[
    "if_statement",
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
    "switch_statement",
];

const JS_LOOP_BINDING: LoopBinding = LoopBinding {
    fields: &["initializer", "left"],
    clauses: &[],
    after_token: None,
};

pub(super) static JAVASCRIPT: ProfileSpec = ProfileSpec {
    id: LanguageId::JavaScript,
    extensions: &["js", "mjs", "cjs", "jsx"],
    grammar: javascript_grammar,
    function: JS_FUNCTIONS,
    block: &["statement_block"],
    key: JS_KEYS,
    ident: JS_IDENTS,
    member: &["member_expression"],
    assign: &[
        "assignment_expression",
        "augmented_assignment_expression",
        "update_expression",
    ],
    declaration: &[
        "variable_declaration",
        "lexical_declaration",
        "variable_declarator",
    ],
    call: &["call_expression", "new_expression"],
    looping: &["for_statement", "for_in_statement"],
    control: JS_CONTROLS,
    loop_binding: JS_LOOP_BINDING,
    comments: C_COMMENTS,
    closing: ClosingStyle::Brace,
};

pub(super) static TYPESCRIPT: ProfileSpec = ProfileSpec {
    id: LanguageId::TypeScript,
    extensions: &["ts", "mts", "cts"],
    grammar: typescript_grammar,
    function: JS_FUNCTIONS,
    block: &["statement_block"],
    key: JS_KEYS,
    ident: JS_IDENTS,
    member: &["member_expression"],
    assign: &[
        "assignment_expression",
        "augmented_assignment_expression",
        "update_expression",
    ],
    declaration: &[
        "variable_declaration",
        "lexical_declaration",
        "variable_declarator",
    ],
    call: &["call_expression", "new_expression"],
    looping: &["for_statement", "for_in_statement"],
    control: JS_CONTROLS,
    loop_binding: JS_LOOP_BINDING,
    comments: C_COMMENTS,
    closing: ClosingStyle::Brace,
};

// =============================================================================
// SCRIPTING
// =============================================================================

pub(super) static PYTHON: ProfileSpec = ProfileSpec {
    id: LanguageId::Python,
    extensions: &["py", "pyi"],
    grammar: python_grammar,
    function: &["function_definition", "lambda"],
    block: &["block"],
    key: &[
        "assignment",
        "augmented_assignment",
        "expression_statement",
        "call",
        "if_statement",
        "return_statement",
        "for_statement",
        "while_statement",
    ],
    ident: &["identifier"],
    member: &["attribute"],
    assign: &["assignment", "augmented_assignment"],
    declaration: &[],
    call: &["call"],
    looping: &["for_statement"],
    control: &["if_statement", "elif_clause", "for_statement", "while_statement"],
    loop_binding: LoopBinding {
        fields: &["left"],
        clauses: &[],
        after_token: None,
    },
    comments: HASH_COMMENTS,
    closing: ClosingStyle::Indent,
};

pub(super) static RUBY: ProfileSpec = ProfileSpec {
    id: LanguageId::Ruby,
    extensions: &["rb"],
    grammar: ruby_grammar,
    function: &["method", "singleton_method"],
    block: &["body_statement", "then", "else", "do", "do_block", "block"],
    key: &[
        "assignment",
        "operator_assignment",
        "call",
        "if",
        "elsif",
        "unless",
        "return",
        "for",
        "while",
        "until",
    ],
    ident: &["identifier", "constant", "instance_variable"],
    member: &["scope_resolution"],
    assign: &["assignment", "operator_assignment"],
    declaration: &[],
    call: &["call"],
    looping: &["for"],
    control: &["if", "elsif", "unless", "while", "until", "for", "case"],
    loop_binding: LoopBinding {
        fields: &["pattern"],
        clauses: &[],
        after_token: None,
    },
    comments: CommentStyle {
        line: &["#"],
        block: &[("=begin", "=end")],
    },
    closing: ClosingStyle::Keyword("end"),
};

pub(super) static PHP: ProfileSpec = ProfileSpec {
    id: LanguageId::Php,
    extensions: &["php"],
    grammar: php_grammar,
    function: &[
        "function_definition",
        "method_declaration",
        "anonymous_function_creation_expression",
        "anonymous_function",
        "arrow_function",
    ],
    block: &["compound_statement"],
    key: &[
        "assignment_expression",
        "augmented_assignment_expression",
        "function_call_expression",
        "member_call_expression",
        "scoped_call_expression",
        "echo_statement",
        "if_statement",
        "return_statement",
        "for_statement",
        "foreach_statement",
        "while_statement",
    ],
    ident: &["name", "variable_name"],
    member: &["member_access_expression", "scoped_property_access_expression"],
    assign: &["assignment_expression", "augmented_assignment_expression"],
    declaration: &[],
    call: &[
        "function_call_expression",
        "member_call_expression",
        "scoped_call_expression",
        "object_creation_expression",
    ],
    looping: &["for_statement", "foreach_statement"],
    control: &[
        "if_statement",
        "else_if_clause",
        "for_statement",
        "foreach_statement",
        "while_statement",
        "do_statement",
        "switch_statement",
    ],
    loop_binding: LoopBinding {
        fields: &[],
        clauses: &[],
        after_token: Some(("as", Some(")"))),
    },
    comments: CommentStyle {
        line: &["//", "#"],
        block: &[("/*", "*/")],
    },
    closing: ClosingStyle::Brace,
};

/// All built-in profiles, in `LanguageId::ALL` order
pub(super) fn builtin() -> [&'static ProfileSpec; 10] {
    [
        &CPP,
        &JAVA,
        &JAVASCRIPT,
        &TYPESCRIPT,
        &PYTHON,
        &CSHARP,
        &GO,
        &RUBY,
        &PHP,
        &RUST,
    ]
}
