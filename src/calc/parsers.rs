#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::calc::{operator::Operator, token::InfixToken};

peg::parser! {
    /// tokenizes infix expressions that have already had whitespace removed.
    pub grammar lexer() for str {
        /// matches a run of digits and decimal points, kept verbatim
        rule number() -> InfixToken
            = n:$(['0'..='9' | '.']+) { InfixToken::Number(n.to_string()) }

        /// matches one of the binary operator symbols
        rule operator() -> InfixToken
            = c:['+' | '-' | '*' | '/' | '^']
            {? Operator::from_symbol(c).map(InfixToken::Operator).ok_or("operator") }

        /// matches an opening parenthesis
        rule left_paren() -> InfixToken
            = "(" { InfixToken::LeftParen }

        /// matches a closing parenthesis
        rule right_paren() -> InfixToken
            = ")" { InfixToken::RightParen }

        /// matches any other single character
        rule invalid() -> InfixToken
            = c:[_] { InfixToken::Invalid(c) }

        /// matches a single token
        rule token() -> InfixToken
            = number() / operator() / left_paren() / right_paren() / invalid()

        /// parses the whole input into tokens; never fails
        pub rule infix_tokens() -> Vec<InfixToken>
            = t:token()* { t }
    }
}

peg::parser! {
    /// splits space-separated RPN input into raw tokens.
    pub grammar rpn() for str {
        /// matches any number of whitespace characters
        rule whitespace() = quiet!{[c if c.is_whitespace()]+}

        /// matches a run of non-whitespace characters
        rule token() -> String
            = t:$([c if !c.is_whitespace()]+) { t.to_string() }

        /// parses and returns every token in order
        pub rule rpn_tokens() -> Vec<String>
            = whitespace()? t:(token() ** whitespace()) whitespace()? { t }
    }
}
