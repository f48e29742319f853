use core::fmt::{self, Display};
use core::ops::Range;
use logos::{Lexer, Logos};

/// Byte range of a token in the lexed input.
pub type Span = Range<usize>;

/// A token together with its position.
pub type Spanned<'s> = (Token<'s>, Span);

#[derive(Logos, Clone, Debug, PartialEq, Eq)]
pub enum Token<'s> {
    #[token("Goal")]
    Goal,

    #[token("forall")]
    Forall,

    #[token("fun")]
    Fun,

    #[token("let")]
    Let,

    #[token("in")]
    In,

    #[token("fix")]
    Fix,

    #[token("struct")]
    Struct,

    #[token("if")]
    If,

    #[token("then")]
    Then,

    #[token("else")]
    Else,

    #[token("match")]
    Match,

    #[token("with")]
    With,

    #[token("end")]
    End,

    #[token("as")]
    As,

    #[token("return")]
    Return,

    #[token("(")]
    LPar,

    #[token(")")]
    RPar,

    #[token("{")]
    LBrc,

    #[token("}")]
    RBrc,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(":=")]
    ColonEq,

    #[token("=>")]
    FatArrow,

    #[token("|")]
    Bar,

    #[token(".")]
    Dot,

    /// Possibly qualified name, possibly followed by a universe instance,
    /// such as `Nat.add` or `eq@{u}`
    #[regex(r"[A-Za-z_][A-Za-z0-9_']*(\.[A-Za-z_][A-Za-z0-9_']*)*(@\{[^}]*\})?", |lex| lex.slice())]
    Ident(&'s str),

    /// Existential variable, such as `?x`
    #[regex(r"\?[A-Za-z_][A-Za-z0-9_']*", |lex| lex.slice())]
    EVar(&'s str),

    #[regex("[0-9]+", |lex| lex.slice())]
    Num(&'s str),

    /// Infix or prefix notation symbol, such as `+`, `->` or `/\`
    #[regex(r"[-+*/<>=~^&!%$\\#@]+", |lex| lex.slice())]
    #[token("::", |lex| lex.slice())]
    #[token("||", |lex| lex.slice())]
    Op(&'s str),

    #[regex(r"[ \t\r\n\f]+")]
    Space,

    #[token("(*", comment)]
    Comment,

    // Logos requires one token variant to handle errors,
    // it can be named anything you wish.
    #[error]
    Error,
}

impl<'s> Token<'s> {
    /// Return true if the token starts a term that extends as far to the right as possible.
    pub fn opens_binder(&self) -> bool {
        matches!(
            self,
            Self::Forall | Self::Fun | Self::Let | Self::Fix | Self::If
        )
    }
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let s = match self {
            Self::Goal => "Goal",
            Self::Forall => "forall",
            Self::Fun => "fun",
            Self::Let => "let",
            Self::In => "in",
            Self::Fix => "fix",
            Self::Struct => "struct",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Match => "match",
            Self::With => "with",
            Self::End => "end",
            Self::As => "as",
            Self::Return => "return",
            Self::LPar => "(",
            Self::RPar => ")",
            Self::LBrc => "{",
            Self::RBrc => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::ColonEq => ":=",
            Self::FatArrow => "=>",
            Self::Bar => "|",
            Self::Dot => ".",
            Self::Ident(s) | Self::EVar(s) | Self::Num(s) | Self::Op(s) => s,
            Self::Space => " ",
            Self::Comment => "(* *)",
            Self::Error => return Err(Default::default()),
        };
        s.fmt(f)
    }
}

fn comment<'s>(lex: &mut Lexer<'s, Token<'s>>) -> Option<()> {
    // number of open comments
    let mut open = 1;
    let prefix: &[_] = &['(', '*'];
    while open > 0 {
        // go to first occurrence of either '(' or '*'
        lex.bump(lex.remainder().find(prefix)?);
        if lex.remainder().starts_with("(*") {
            open += 1;
            lex.bump(2);
        } else if lex.remainder().starts_with("*)") {
            open -= 1;
            lex.bump(2);
        } else {
            lex.bump(1);
        }
    }
    Some(())
}

#[test]
fn tokens() {
    use alloc::vec::Vec;
    let lexed = |s| crate::lex(s).map(|(tok, _)| tok).collect::<Vec<_>>();
    assert_eq!(
        lexed("forall (n : nat), n + 0 = n"),
        [
            Token::Forall,
            Token::LPar,
            Token::Ident("n"),
            Token::Colon,
            Token::Ident("nat"),
            Token::RPar,
            Token::Comma,
            Token::Ident("n"),
            Token::Op("+"),
            Token::Num("0"),
            Token::Op("="),
            Token::Ident("n"),
        ]
    );
    assert_eq!(
        lexed("Nat.add x. (* a (* nested *) comment *)"),
        [Token::Ident("Nat.add"), Token::Ident("x"), Token::Dot]
    );
    assert_eq!(
        lexed("eq@{u} ?x Type@{Set+1} => := ::"),
        [
            Token::Ident("eq@{u}"),
            Token::EVar("?x"),
            Token::Ident("Type@{Set+1}"),
            Token::FatArrow,
            Token::ColonEq,
            Token::Op("::"),
        ]
    );
    assert_eq!(lexed("(* unclosed").first(), Some(&Token::Error));
}
