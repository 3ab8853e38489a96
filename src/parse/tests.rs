#![allow(non_snake_case)]

use super::*;

use insta::assert_snapshot;
use proptest::prelude::*;

fn parsed(text: &str) -> Rc<Sentence> {
    parse(text).unwrap().0
}

fn reason(text: &str) -> ParseErrorReason {
    parse(text).unwrap_err().reason
}

#[test]
fn parse__atomic() {
    let (sentence, set) = parse("p").unwrap();

    assert!(sentence.is_atomic());
    assert!(!sentence.is_negated());
    assert_eq!(sentence.token().map(Token::as_str), Some("p"));
    assert_eq!(set.len(), 1);
}

#[test]
fn parse__negated_atomic() {
    let (sentence, set) = parse("~p").unwrap();

    assert!(sentence.is_atomic());
    assert!(sentence.is_negated());
    assert_eq!(sentence.token().map(Token::as_str), Some("p"));
    assert_eq!(set.len(), 1);
}

#[test]
fn parse__nested() {
    let sentence = parsed("(a & b) v ~(c > d)");
    assert_eq!(sentence.connective(), Some(Connective::Or));
    assert!(!sentence.is_negated());

    let (left, right) = sentence.children().unwrap();
    assert_eq!(left.connective(), Some(Connective::And));
    assert!(!left.is_negated());
    assert_eq!(**left, *parsed("a & b"));

    assert_eq!(right.connective(), Some(Connective::Conditional));
    assert!(right.is_negated());
    assert_eq!(**right, parsed("c > d").negate());
}

#[test]
fn parse__display_snapshots() {
    assert_snapshot!(parsed("p1 & Q2").to_string(), @"(p1 & Q2)");
    assert_snapshot!(parsed("a & b v c").to_string(), @"(a & (b v c))");
    assert_snapshot!(parsed("(a & b) v c").to_string(), @"((a & b) v c)");
    assert_snapshot!(parsed("~a & b").to_string(), @"(~a & b)");
    assert_snapshot!(parsed("~(a = b) > ~~c").to_string(), @"(~(a = b) > c)");
}

#[test]
fn parse__is_not_commutative() {
    assert_ne!(parsed("a & b"), parsed("b & a"));
    assert_ne!(parsed("a > b"), parsed("b > a"));
}

#[test]
fn parse__whitespace_is_insignificant() {
    assert_eq!(parsed("  ( p>q )  "), parsed("p > q"));
    assert_eq!(parsed("~ p"), parsed("~p"));
}

#[test]
fn parse__redundant_parentheses() {
    assert_eq!(parsed("((p))"), parsed("p"));
    assert_eq!(parsed("((a) & (b))"), parsed("a & b"));
}

#[test]
fn parse__negation_toggles_by_default() {
    assert_eq!(parsed("~~p"), parsed("p"));
    assert_eq!(parsed("~~~p"), parsed("~p"));
    assert_eq!(parsed("~~(a v b)"), parsed("a v b"));
}

#[test]
fn parse__negation_can_be_set() {
    let parser = Parser::with_config(ParseConfig {
        negation: Negation::Set,
        ..ParseConfig::default()
    });

    assert_eq!(parser.parse("~~p").unwrap().0, parsed("~p"));
    assert_eq!(parser.parse("~(~(a v b))").unwrap().0, parsed("~(a v b)"));
}

#[test]
fn parser__keeps_its_config() {
    let config = ParseConfig {
        negation: Negation::Set,
        max_depth: 8,
    };

    assert_eq!(Parser::new().config(), &ParseConfig::default());
    assert_eq!(Parser::with_config(config.clone()).config(), &config);
}

#[test]
fn parse__registers_children_before_parents() {
    let (_, set) = parse("p & (q v r)").unwrap();
    let rendered: Vec<_> = set.iter().map(ToString::to_string).collect();

    assert_eq!(rendered, vec!["q", "r", "p", "(q v r)", "(p & (q v r))"]);
}

#[test]
fn parse__shares_equal_subtrees() {
    let (sentence, set) = parse("(p & q) > (p & q)").unwrap();
    let (left, right) = sentence.children().unwrap();

    assert!(Rc::ptr_eq(left, right));
    assert_eq!(set.len(), 4);
}

#[test]
fn parse_into__shares_existing_members() {
    let (p, mut set) = parse("p").unwrap();
    let sentence = parse_into("p & q", &mut set).unwrap();
    let (left, _) = sentence.children().unwrap();

    assert!(Rc::ptr_eq(&p, left));
    assert_eq!(set.len(), 3);
}

#[test]
fn parse_into__failure_leaves_set_unchanged() {
    let (_, mut set) = parse("p").unwrap();
    let before = set.clone();

    let error = parse_into("(q & r) v (s $ t)", &mut set).unwrap_err();

    assert_eq!(error.reason, ParseErrorReason::UnknownCharacter);
    assert_eq!(set, before);
}

#[test]
fn invalid_parse__unbalanced_parens() {
    assert_eq!(
        parse("(a & b").unwrap_err(),
        ParseError::new(ParseErrorReason::UnbalancedParens, 0)
    );
    assert_eq!(
        parse("a) & (b").unwrap_err(),
        ParseError::new(ParseErrorReason::UnbalancedParens, 1)
    );
    assert_eq!(reason("p & q)"), ParseErrorReason::UnbalancedParens);
}

#[test]
fn invalid_parse__empty_operand() {
    assert_eq!(
        parse("a &").unwrap_err(),
        ParseError::new(ParseErrorReason::EmptyOperand, 3)
    );
    assert_eq!(
        parse("& a").unwrap_err(),
        ParseError::new(ParseErrorReason::EmptyOperand, 0)
    );
    assert_eq!(reason("valid"), ParseErrorReason::EmptyOperand);
    assert_eq!(reason("(a > ) v b"), ParseErrorReason::EmptyOperand);
}

#[test]
fn invalid_parse__empty_expression() {
    assert_eq!(
        parse("").unwrap_err(),
        ParseError::new(ParseErrorReason::EmptyExpression, 0)
    );
    assert_eq!(reason("   "), ParseErrorReason::EmptyExpression);
    assert_eq!(
        parse("()").unwrap_err(),
        ParseError::new(ParseErrorReason::EmptyExpression, 1)
    );
    assert_eq!(
        parse("~").unwrap_err(),
        ParseError::new(ParseErrorReason::EmptyExpression, 1)
    );
}

#[test]
fn invalid_parse__unknown_character() {
    assert_eq!(
        parse("a$b").unwrap_err(),
        ParseError::new(ParseErrorReason::UnknownCharacter, 1)
    );
    assert_eq!(
        parse("p & q r").unwrap_err(),
        ParseError::new(ParseErrorReason::UnknownCharacter, 5)
    );
    assert_eq!(reason("a~b"), ParseErrorReason::UnknownCharacter);
}

#[test]
fn invalid_parse__too_deep() {
    let parser = Parser::with_config(ParseConfig {
        max_depth: 3,
        ..ParseConfig::default()
    });

    assert!(parser.parse("((p))").is_ok());
    assert_eq!(
        parser.parse("(((p)))").unwrap_err(),
        ParseError::new(ParseErrorReason::TooDeep, 3)
    );
}

#[test]
fn invalid_parse__default_depth_limit() {
    let nested = |depth: usize| format!("{}p{}", "(".repeat(depth), ")".repeat(depth));

    assert!(parse(&nested(DEFAULT_MAX_DEPTH - 1)).is_ok());
    assert_eq!(
        reason(&nested(DEFAULT_MAX_DEPTH)),
        ParseErrorReason::TooDeep
    );
}

#[test]
fn parse_error__display() {
    assert_eq!(
        parse("(a & b").unwrap_err().to_string(),
        "Unbalanced parentheses at byte 0"
    );
    assert_eq!(
        parse("a &").unwrap_err().to_string(),
        "Connective missing an operand at byte 3"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]
    #[test]
    fn parse__roundtrips_through_display(sentence in Sentence::arb_sentence(6)) {
        let (parsed, set) = parse(&sentence.to_string()).unwrap();

        prop_assert_eq!(&*parsed, &sentence);
        prop_assert!(set.contains(&sentence));
    }

    #[test]
    fn parse__accepted_text_roundtrips(text in "[pq()~&v>= ]{0,16}") {
        if let Ok((parsed, _)) = parse(&text) {
            let (reparsed, _) = parse(&parsed.to_string()).unwrap();
            prop_assert_eq!(reparsed, parsed);
        }
    }
}
