use super::{
    super::{
        Error, Result,
        ast::{
            BoostSuffix, Comparison, DRangeTerm, FuzzySuffix, FuzzyTerm, GroupClause, Literal,
            LogicTermGroup, Modifier, ParenTermGroup, PhraseTerm, Range, RangeTerm, RangeValue,
            RegexpTerm, SRangeTerm, SingleTerm, Term, TermGroup, TermGroupElem,
        },
        lexer::TokenKind,
    },
    Parser,
};

/// Token kinds an unquoted term is made of.
const TERM_FRAGMENTS: &[TokenKind] = &[
    TokenKind::Ident,
    TokenKind::Number,
    TokenKind::Dot,
    TokenKind::Minus,
    TokenKind::Wildcard,
];

const TERM_START: &[TokenKind] = &[
    TokenKind::Slash,
    TokenKind::Quote,
    TokenKind::Compare,
    TokenKind::LBracket,
    TokenKind::LBrace,
    TokenKind::LParen,
    TokenKind::Ident,
    TokenKind::Number,
    TokenKind::Dot,
    TokenKind::Minus,
    TokenKind::Wildcard,
];

const GROUP_ELEM_START: &[TokenKind] = &[
    TokenKind::LParen,
    TokenKind::Quote,
    TokenKind::Compare,
    TokenKind::LBracket,
    TokenKind::LBrace,
    TokenKind::Ident,
    TokenKind::Number,
    TokenKind::Dot,
    TokenKind::Minus,
    TokenKind::Wildcard,
];

const RANGE_VALUE_START: &[TokenKind] = &[
    TokenKind::Quote,
    TokenKind::Ident,
    TokenKind::Number,
    TokenKind::Dot,
    TokenKind::Minus,
    TokenKind::Wildcard,
];

impl Parser {
    /// `term := regexp | fuzzy_term | range_term | term_group`
    pub(super) fn parse_term_value(&mut self) -> Result<Term> {
        match self.peek_kind() {
            Some(TokenKind::Slash) => self.parse_regexp().map(Term::Regexp),
            Some(TokenKind::Quote) => {
                let literal = Literal::Phrase(self.parse_phrase()?);
                self.parse_fuzzy_term(literal).map(Term::Fuzzy)
            }
            Some(TokenKind::Compare | TokenKind::LBracket | TokenKind::LBrace) => {
                self.parse_range_term().map(Term::Range)
            }
            Some(TokenKind::LParen) => self.parse_term_group().map(Term::Group),
            Some(kind) if TERM_FRAGMENTS.contains(&kind) => {
                let literal = Literal::Single(self.parse_single()?);
                self.parse_fuzzy_term(literal).map(Term::Fuzzy)
            }
            _ => Err(self.unexpected(TERM_START)),
        }
    }

    fn parse_single(&mut self) -> Result<SingleTerm> {
        let tokens = self.take_run(TERM_FRAGMENTS);
        if tokens.is_empty() {
            return Err(self.unexpected(TERM_FRAGMENTS));
        }
        Ok(SingleTerm::new(tokens))
    }

    /// `phrase := '"' any* '"'`
    fn parse_phrase(&mut self) -> Result<PhraseTerm> {
        self.expect(TokenKind::Quote)?;
        Ok(PhraseTerm::new(self.take_delimited(TokenKind::Quote)?))
    }

    /// `regexp := '/' any* '/'`
    fn parse_regexp(&mut self) -> Result<RegexpTerm> {
        self.expect(TokenKind::Slash)?;
        Ok(RegexpTerm {
            tokens: self.take_delimited(TokenKind::Slash)?,
        })
    }

    /// `fuzzy_term := literal (fuzzy_suffix | boost_suffix)?`
    fn parse_fuzzy_term(&mut self, literal: Literal) -> Result<FuzzyTerm> {
        let modifier = match self.peek_kind() {
            Some(TokenKind::Fuzzy) => Some(Modifier::Fuzzy(self.parse_fuzzy_suffix())),
            Some(TokenKind::Boost) => Some(Modifier::Boost(self.parse_boost_suffix())),
            _ => None,
        };
        Ok(FuzzyTerm { literal, modifier })
    }

    /// `fuzzy_suffix := '~' NUMBER?`
    fn parse_fuzzy_suffix(&mut self) -> FuzzySuffix {
        self.bump();
        let distance = self
            .at(&[TokenKind::Number])
            .then(|| self.bump())
            .flatten()
            .map(|t| t.text);
        FuzzySuffix { distance }
    }

    /// `boost_suffix := '^' (NUMBER ('.' NUMBER)?)?`
    fn parse_boost_suffix(&mut self) -> BoostSuffix {
        self.bump();
        if !self.at(&[TokenKind::Number]) {
            return BoostSuffix { magnitude: None };
        }
        let mut magnitude = self.bump().map(|t| t.text).unwrap_or_default();
        if self.peek_kind() == Some(TokenKind::Dot)
            && self.peek_kind_at(1) == Some(TokenKind::Number)
        {
            self.bump();
            magnitude.push('.');
            magnitude.extend(self.bump().map(|t| t.text));
        }
        BoostSuffix {
            magnitude: Some(magnitude),
        }
    }

    fn parse_optional_boost(&mut self) -> Option<BoostSuffix> {
        self.at(&[TokenKind::Boost])
            .then(|| self.parse_boost_suffix())
    }

    /// `range_term := (srange | drange) boost_suffix?`
    fn parse_range_term(&mut self) -> Result<RangeTerm> {
        let range = if self.at(&[TokenKind::Compare]) {
            Range::Single(self.parse_srange()?)
        } else {
            Range::Double(self.parse_drange()?)
        };
        let boost = self.parse_optional_boost();
        Ok(RangeTerm { range, boost })
    }

    /// `range_value := '*' | phrase | single`
    fn parse_range_value(&mut self) -> Result<RangeValue> {
        match self.peek_kind() {
            Some(TokenKind::Quote) => Ok(RangeValue::Phrase(self.parse_phrase()?)),
            Some(kind) if TERM_FRAGMENTS.contains(&kind) => {
                let single = self.parse_single()?;
                Ok(if single.is_match_all() {
                    RangeValue::Infinity
                } else {
                    RangeValue::Single(single)
                })
            }
            _ => Err(self.unexpected(RANGE_VALUE_START)),
        }
    }

    /// `srange := COMPARE range_value`
    fn parse_srange(&mut self) -> Result<SRangeTerm> {
        let pos = self.offset();
        let symbol = self.expect(TokenKind::Compare)?;
        let op = Comparison::from_symbol(&symbol.text).ok_or_else(|| {
            Error::Internal(format!("bad comparison '{}' at {pos}", symbol.text))
        })?;
        Ok(SRangeTerm::new(op, self.parse_range_value()?))
    }

    /// `drange := ('[' | '{') range_value TO range_value (']' | '}')`
    fn parse_drange(&mut self) -> Result<DRangeTerm> {
        let left_inclusive = match self.peek_kind() {
            Some(TokenKind::LBracket) => true,
            Some(TokenKind::LBrace) => false,
            _ => return Err(self.unexpected(&[TokenKind::LBracket, TokenKind::LBrace])),
        };
        self.bump();
        self.skip_space();
        let left = self.parse_range_value()?;
        self.expect_to()?;
        let right = self.parse_range_value()?;
        self.skip_space();
        let right_inclusive = match self.peek_kind() {
            Some(TokenKind::RBracket) => true,
            Some(TokenKind::RBrace) => false,
            _ => return Err(self.unexpected(&[TokenKind::RBracket, TokenKind::RBrace])),
        };
        self.bump();
        Ok(DRangeTerm {
            left_inclusive,
            left,
            right,
            right_inclusive,
        })
    }

    /// Consumes ` TO `, with mandatory space on both sides.
    fn expect_to(&mut self) -> Result<()> {
        if self.skip_space() == 0 {
            return Err(self.unexpected(&[TokenKind::Whitespace]));
        }
        if !self.peek().is_some_and(|t| t.is_word(&["TO"])) {
            return Err(self.unexpected(&[TokenKind::Ident]));
        }
        self.bump();
        if self.skip_space() == 0 {
            return Err(self.unexpected(&[TokenKind::Whitespace]));
        }
        Ok(())
    }

    /// `term_group := '(' space* bool_expr space* ')' boost_suffix?`
    fn parse_term_group(&mut self) -> Result<TermGroup> {
        let group = *self.parse_group_parens()?;
        let boost = self.parse_optional_boost();
        Ok(TermGroup { group, boost })
    }

    fn parse_group_parens(&mut self) -> Result<Box<LogicTermGroup>> {
        self.enter()?;
        self.expect(TokenKind::LParen)?;
        self.skip_space();
        let group = self.parse_bool_expr(Self::parse_group_clause)?;
        self.skip_space();
        self.expect(TokenKind::RParen)?;
        self.leave();
        Ok(Box::new(group))
    }

    /// `group_clause := '(' bool_expr ')' | single | phrase | srange | drange`
    fn parse_group_clause(&mut self) -> Result<GroupClause> {
        let elem = match self.peek_kind() {
            Some(TokenKind::LParen) => {
                return Ok(GroupClause::Paren(ParenTermGroup {
                    sub_group: self.parse_group_parens()?,
                }));
            }
            Some(TokenKind::Quote) => TermGroupElem::Phrase(self.parse_phrase()?),
            Some(TokenKind::Compare) => TermGroupElem::SRange(self.parse_srange()?),
            Some(TokenKind::LBracket | TokenKind::LBrace) => {
                TermGroupElem::DRange(self.parse_drange()?)
            }
            Some(kind) if TERM_FRAGMENTS.contains(&kind) => {
                TermGroupElem::Single(self.parse_single()?)
            }
            _ => return Err(self.unexpected(GROUP_ELEM_START)),
        };
        Ok(GroupClause::Elem(elem))
    }
}
