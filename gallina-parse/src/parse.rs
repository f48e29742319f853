//! Recursive-descent parsing of terms and goals.

use crate::cmd::Goal;
use crate::term::{Binder, Case, Fix, If, Match, Pattern, Subject, Term, TermC};
use crate::{Span, Spanned, Token};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::iter::Peekable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidToken,
    ExpectedTerm,
    ExpectedIdent,
    ExpectedPattern,
    ExpectedBinder,
    ExpectedColon,
    ExpectedColonEq,
    ExpectedComma,
    ExpectedFatArrow,
    ExpectedRPar,
    ExpectedRBrc,
    ExpectedStruct,
    ExpectedIn,
    ExpectedThen,
    ExpectedElse,
    ExpectedWith,
    ExpectedEnd,
    ExpectedGoal,
    ExpectedDot,
    ExpectedEof,
}

/// Parse error, together with the offending token position.
///
/// A missing position means that the input ended prematurely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Option<Span>,
}

impl Error {
    fn unexpected(kind: ErrorKind, found: Option<Spanned>) -> Self {
        match found {
            Some((Token::Error, span)) => Self {
                kind: ErrorKind::InvalidToken,
                span: Some(span),
            },
            found => Self {
                kind,
                span: found.map(|(_, span)| span),
            },
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::InvalidToken => "invalid token",
            Self::ExpectedTerm => "expected term",
            Self::ExpectedIdent => "expected identifier",
            Self::ExpectedPattern => "expected pattern",
            Self::ExpectedBinder => "expected binder",
            Self::ExpectedColon => "expected `:`",
            Self::ExpectedColonEq => "expected `:=`",
            Self::ExpectedComma => "expected `,`",
            Self::ExpectedFatArrow => "expected `=>`",
            Self::ExpectedRPar => "expected `)`",
            Self::ExpectedRBrc => "expected `}`",
            Self::ExpectedStruct => "expected `struct`",
            Self::ExpectedIn => "expected `in`",
            Self::ExpectedThen => "expected `then`",
            Self::ExpectedElse => "expected `else`",
            Self::ExpectedWith => "expected `with`",
            Self::ExpectedEnd => "expected `end`",
            Self::ExpectedGoal => "expected `Goal`",
            Self::ExpectedDot => "expected `.`",
            Self::ExpectedEof => "expected end of input",
        };
        s.fmt(f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.span {
            Some(span) => write!(f, "{} at {}..{}", self.kind, span.start, span.end),
            None => write!(f, "{} at end of input", self.kind),
        }
    }
}

/// Consume the next token if it equals `tok`, else fail with `kind`.
fn expect<'s, I>(iter: &mut Peekable<I>, tok: Token<'s>, kind: ErrorKind) -> Result<(), Error>
where
    I: Iterator<Item = Spanned<'s>>,
{
    match iter.next() {
        Some((next, _)) if next == tok => Ok(()),
        found => Err(Error::unexpected(kind, found)),
    }
}

/// Consume the next token if it equals `tok`.
fn accept<'s, I>(iter: &mut Peekable<I>, tok: Token<'s>) -> bool
where
    I: Iterator<Item = Spanned<'s>>,
{
    iter.next_if(|(next, _)| *next == tok).is_some()
}

fn parse_ident<'s>(iter: &mut impl Iterator<Item = Spanned<'s>>) -> Result<&'s str, Error> {
    match iter.next() {
        Some((Token::Ident(id), _)) => Ok(id),
        found => Err(Error::unexpected(ErrorKind::ExpectedIdent, found)),
    }
}

/// Parse `as x` if present.
fn parse_alias<'s, I>(iter: &mut Peekable<I>) -> Result<Option<&'s str>, Error>
where
    I: Iterator<Item = Spanned<'s>>,
{
    if accept(iter, Token::As) {
        parse_ident(iter).map(Some)
    } else {
        Ok(None)
    }
}

pub trait Parse<'s>: Sized {
    fn parse<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>;

    fn consume(iter: impl Iterator<Item = Spanned<'s>>) -> Result<Self, Error> {
        let mut iter = iter.peekable();
        let y = Self::parse(&mut iter)?;
        match iter.next() {
            None => Ok(y),
            found => Err(Error::unexpected(ErrorKind::ExpectedEof, found)),
        }
    }

    fn parse_str(s: &'s str) -> Result<Self, Error> {
        Self::consume(crate::lex(s))
    }
}

impl<'s> Parse<'s> for Goal<&'s str> {
    fn parse<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        expect(iter, Token::Goal, ErrorKind::ExpectedGoal)?;
        let theorem = parse_ident(iter)?;
        let hyps = Binder::parse_groups(iter)?;
        expect(iter, Token::Colon, ErrorKind::ExpectedColon)?;
        let concl = Term::parse(iter)?;
        expect(iter, Token::Dot, ErrorKind::ExpectedDot)?;
        Ok(Self {
            theorem,
            hyps,
            concl,
        })
    }
}

impl<'s> Parse<'s> for Term<&'s str> {
    fn parse<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        match iter.peek().map(|(tok, _)| tok) {
            // `forall x : A, t`
            Some(Token::Forall) => {
                iter.next();
                let binders = Binder::parse_many(iter)?;
                expect(iter, Token::Comma, ErrorKind::ExpectedComma)?;
                Ok(Self::comb(TermC::Forall(binders, Self::parse(iter)?)))
            }
            // `fun x : A => t`
            Some(Token::Fun) => {
                iter.next();
                let binders = Binder::parse_many(iter)?;
                expect(iter, Token::FatArrow, ErrorKind::ExpectedFatArrow)?;
                Ok(Self::comb(TermC::Fun(binders, Self::parse(iter)?)))
            }
            Some(Token::Let) => {
                iter.next();
                Self::parse_let(iter)
            }
            Some(Token::Fix) => {
                iter.next();
                Ok(Self::comb(TermC::Fix(Fix::parse_after_fix(iter)?)))
            }
            Some(Token::If) => {
                iter.next();
                Ok(Self::comb(TermC::If(If::parse_after_if(iter)?)))
            }
            _ => Self::parse_appl(iter),
        }
    }
}

impl<'s> Term<&'s str> {
    /// Parse `x : A := u in t`.
    fn parse_let<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let x = parse_ident(iter)?;
        let ty = if accept(iter, Token::Colon) {
            Some(Self::parse(iter)?)
        } else {
            None
        };
        expect(iter, Token::ColonEq, ErrorKind::ExpectedColonEq)?;
        let def = Self::parse(iter)?;
        expect(iter, Token::In, ErrorKind::ExpectedIn)?;
        Ok(Self::comb(TermC::Let(x, ty, def, Self::parse(iter)?)))
    }

    /// Parse a term followed by a closing parenthesis, possibly with a type cast.
    fn parse_and_rpar<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let tm = Self::parse(iter)?;
        match iter.next() {
            Some((Token::RPar, _)) => Ok(tm),
            Some((Token::Colon, _)) => {
                let ty = Self::parse(iter)?;
                expect(iter, Token::RPar, ErrorKind::ExpectedRPar)?;
                Ok(Self::comb(TermC::Cast(tm, ty)))
            }
            found => Err(Error::unexpected(ErrorKind::ExpectedRPar, found)),
        }
    }

    // sterm
    fn parse_atom<I>(iter: &mut Peekable<I>) -> Result<Option<Self>, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let atom = match iter.peek() {
            Some((Token::Ident(s), _)) => Self::ident(*s),
            Some((Token::EVar(s) | Token::Num(s) | Token::Op(s), _)) => Self::Symb(*s),
            Some((Token::LPar, _)) => {
                iter.next();
                return Self::parse_and_rpar(iter).map(Some);
            }
            Some((Token::Match, _)) => {
                iter.next();
                let m = Match::parse_after_match(iter)?;
                return Ok(Some(Self::comb(TermC::Match(m))));
            }
            _ => return Ok(None),
        };
        iter.next();
        Ok(Some(atom))
    }

    /// Parse `t u1 ... un`, where `un` may be a binder such as `forall x : A, u`.
    pub(crate) fn parse_appl<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let head = match Self::parse_atom(iter)? {
            Some(head) => head,
            None => return Err(Error::unexpected(ErrorKind::ExpectedTerm, iter.next())),
        };
        let mut args = Vec::new();
        loop {
            if iter.peek().map_or(false, |(tok, _)| tok.opens_binder()) {
                args.push(Self::parse(iter)?);
                break;
            }
            match Self::parse_atom(iter)? {
                Some(tm) => args.push(tm),
                None => break,
            }
        }
        if args.is_empty() {
            Ok(head)
        } else {
            Ok(Self::comb(TermC::Appl(head, args)))
        }
    }
}

impl<'s> Binder<&'s str> {
    /// Parse `x1 ... xn : A`.
    fn parse_names_type<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let mut names = Vec::from([parse_ident(iter)?]);
        while let Some((Token::Ident(x), _)) = iter.peek() {
            names.push(*x);
            iter.next();
        }
        expect(iter, Token::Colon, ErrorKind::ExpectedColon)?;
        let ty = Term::parse(iter)?;
        Ok(Self { names, ty })
    }

    /// Parse zero or more `(x1 ... xn : A)`.
    fn parse_groups<I>(iter: &mut Peekable<I>) -> Result<Vec<Self>, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let mut binders = Vec::new();
        while accept(iter, Token::LPar) {
            binders.push(Self::parse_names_type(iter)?);
            expect(iter, Token::RPar, ErrorKind::ExpectedRPar)?;
        }
        Ok(binders)
    }

    /// Parse either one or more parenthesised groups or a single bare group.
    fn parse_many<I>(iter: &mut Peekable<I>) -> Result<Vec<Self>, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        match iter.peek() {
            Some((Token::LPar, _)) => Self::parse_groups(iter),
            Some((Token::Ident(_), _)) => Ok(Vec::from([Self::parse_names_type(iter)?])),
            _ => Err(Error::unexpected(ErrorKind::ExpectedBinder, iter.next())),
        }
    }
}

impl<'s> Fix<&'s str> {
    /// Parse `f (x : A) {struct x} : B := t`.
    fn parse_after_fix<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let name = parse_ident(iter)?;
        let params = Binder::parse_groups(iter)?;
        if params.is_empty() {
            return Err(Error::unexpected(ErrorKind::ExpectedBinder, iter.next()));
        }
        let struct_arg = if accept(iter, Token::LBrc) {
            expect(iter, Token::Struct, ErrorKind::ExpectedStruct)?;
            let x = parse_ident(iter)?;
            expect(iter, Token::RBrc, ErrorKind::ExpectedRBrc)?;
            Some(x)
        } else {
            None
        };
        expect(iter, Token::Colon, ErrorKind::ExpectedColon)?;
        let ty = Term::parse(iter)?;
        expect(iter, Token::ColonEq, ErrorKind::ExpectedColonEq)?;
        let body = Term::parse(iter)?;
        Ok(Self {
            name,
            params,
            struct_arg,
            ty,
            body,
        })
    }
}

impl<'s> If<&'s str> {
    /// Parse `g as x return P then t else u`.
    fn parse_after_if<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let guard = Term::parse_appl(iter)?;
        let alias = parse_alias(iter)?;
        let ret = if accept(iter, Token::Return) {
            Some(Term::parse(iter)?)
        } else {
            None
        };
        expect(iter, Token::Then, ErrorKind::ExpectedThen)?;
        let then = Term::parse(iter)?;
        expect(iter, Token::Else, ErrorKind::ExpectedElse)?;
        let els = Term::parse(iter)?;
        Ok(Self {
            guard,
            alias,
            ret,
            then,
            els,
        })
    }
}

impl<'s> Match<&'s str> {
    /// Parse `t1, ..., tn return P with | c1 | ... | cm end`.
    fn parse_after_match<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let mut subjects = Vec::from([Subject::parse(iter)?]);
        while accept(iter, Token::Comma) {
            subjects.push(Subject::parse(iter)?);
        }
        let ret = if accept(iter, Token::Return) {
            Some(Term::parse(iter)?)
        } else {
            None
        };
        expect(iter, Token::With, ErrorKind::ExpectedWith)?;

        let mut cases = Vec::new();
        let leading_bar = accept(iter, Token::Bar);
        if leading_bar || !matches!(iter.peek(), Some((Token::End, _))) {
            cases.push(Case::parse(iter)?);
            while accept(iter, Token::Bar) {
                cases.push(Case::parse(iter)?);
            }
        }
        expect(iter, Token::End, ErrorKind::ExpectedEnd)?;
        Ok(Self {
            subjects,
            ret,
            cases,
        })
    }
}

impl<'s> Parse<'s> for Subject<&'s str> {
    fn parse<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let term = Term::parse_appl(iter)?;
        let alias = parse_alias(iter)?;
        let pattern = if accept(iter, Token::In) {
            Some(Pattern::parse(iter)?)
        } else {
            None
        };
        Ok(Self {
            term,
            alias,
            pattern,
        })
    }
}

impl<'s> Parse<'s> for Case<&'s str> {
    fn parse<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        let mut patterns = Vec::from([Pattern::parse(iter)?]);
        while accept(iter, Token::Comma) {
            patterns.push(Pattern::parse(iter)?);
        }
        expect(iter, Token::FatArrow, ErrorKind::ExpectedFatArrow)?;
        let body = Term::parse(iter)?;
        Ok(Self { patterns, body })
    }
}

impl<'s> Parse<'s> for Pattern<&'s str> {
    fn parse<I>(iter: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = Spanned<'s>>,
    {
        if accept(iter, Token::LPar) {
            let mut pattern = Self::parse(iter)?;
            expect(iter, Token::RPar, ErrorKind::ExpectedRPar)?;
            if let Some(alias) = parse_alias(iter)? {
                pattern.alias = Some(alias);
            }
            return Ok(pattern);
        }
        let mut names = Vec::new();
        while let Some((Token::Ident(x) | Token::Num(x), _)) = iter.peek() {
            names.push(*x);
            iter.next();
        }
        if names.is_empty() {
            return Err(Error::unexpected(ErrorKind::ExpectedPattern, iter.next()));
        }
        let alias = parse_alias(iter)?;
        Ok(Self { names, alias })
    }
}

#[test]
fn positive() -> Result<(), Error> {
    Term::parse_str("x")?;
    Term::parse_str("f x (g y) z")?;
    Term::parse_str("forall (x y : nat) (H : x = y), y = x")?;
    Term::parse_str("forall x y : nat, x + y = y + x")?;
    Term::parse_str("fun (A : Type) (x : A) => x")?;
    Term::parse_str("let x := 1 in x + x")?;
    Term::parse_str("let x : nat := 1 in x + x")?;
    Term::parse_str("fix f (n : nat) {struct n} : nat := f n")?;
    Term::parse_str("if b as c return P c then x else y")?;
    Term::parse_str("if b then x else y")?;
    Term::parse_str("match n with | O => 0 | S k => k end")?;
    Term::parse_str("match n with O => 0 | S k => k end")?;
    Term::parse_str("match n, m with end")?;
    Term::parse_str("match v as w in vec _ k return P k w with | nil => 0 | cons _ _ t => 1 end")?;
    Term::parse_str("match p with | (pair a b) as q => a end")?;
    Term::parse_str("(x : nat)")?;
    Term::parse_str("P -> forall x : nat, Q x")?;
    Term::parse_str("Type@{u} -> Prop")?;
    Ok(())
}

#[test]
fn shapes() -> Result<(), Error> {
    let tm = Term::parse_str("f x (g y)")?;
    let expected = Term::comb(TermC::Appl(
        Term::Symb("f"),
        Vec::from([
            Term::Symb("x"),
            Term::comb(TermC::Appl(Term::Symb("g"), Vec::from([Term::Symb("y")]))),
        ]),
    ));
    assert_eq!(tm, expected);

    assert_eq!(Term::parse_str("Type@{u}")?, Term::Sort("Type", Some("@{u}")));
    assert_eq!(Term::parse_str("Prop")?, Term::Sort("Prop", None));

    // a binder extends as far to the right as possible
    match Term::parse_str("P -> forall x : A, Q")? {
        Term::Comb(c) => match *c {
            TermC::Appl(_, args) => assert!(matches!(&args[1], Term::Comb(c) if matches!(**c, TermC::Forall(..)))),
            _ => panic!("application expected"),
        },
        _ => panic!("application expected"),
    }
    Ok(())
}

#[test]
fn negative() {
    use ErrorKind::*;
    let kind = |s| Term::parse_str(s).unwrap_err().kind;
    assert_eq!(kind(""), ExpectedTerm);
    assert_eq!(kind("(a"), ExpectedRPar);
    assert_eq!(kind("forall x, P"), ExpectedColon);
    assert_eq!(kind("forall , P"), ExpectedBinder);
    assert_eq!(kind("fun x : A, t"), ExpectedFatArrow);
    assert_eq!(kind("let x := 1 x"), ExpectedIn);
    assert_eq!(kind("fix f : nat := f"), ExpectedBinder);
    assert_eq!(kind("fix f (x : nat) {x} : nat := f"), ExpectedStruct);
    assert_eq!(kind("if b then x"), ExpectedElse);
    assert_eq!(kind("match n with | => 0 end"), ExpectedPattern);
    assert_eq!(kind("match n with | O => 0"), ExpectedEnd);
    assert_eq!(kind("a ) b"), ExpectedEof);
    assert_eq!(kind("a ; b"), InvalidToken);

    let err = Term::parse_str("f (x").unwrap_err();
    assert_eq!(err.span, None);
    let err = Term::parse_str("f x )").unwrap_err();
    assert_eq!(err.span, Some(4..5));
}
