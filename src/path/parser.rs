//! Parser für Pfad-Strings (SVG-Pfadsyntax).
//!
//! Expliziter Scanner statt Regex: ein Befehlsbuchstabe gefolgt von einer
//! Folge von Zahlen. Enthält ein Befehl mehrere Argumentgruppen, wird er
//! wie in SVG in mehrere Aufrufe derselben Art aufgeteilt; ein wiederholtes
//! `M`/`m` wird dabei zu `L`/`l`.

use super::error::PathError;
use crate::core::{Command, CommandKind};

/// Zerlegt einen Pfad-String in typisierte Zeichenbefehle.
pub fn parse_path(text: &str) -> Result<Vec<Command>, PathError> {
    let mut scanner = Scanner::new(text);
    let mut commands = Vec::new();

    while let Some(token) = scanner.next_token()? {
        let Token::Letter {
            letter,
            position,
            kind,
            relative,
        } = token
        else {
            return Err(PathError::MissingCommand {
                position: token.position(),
            });
        };

        let mut args = Vec::new();
        while let Some(value) = scanner.next_number()? {
            args.push(value);
        }

        split_invocations(letter, position, kind, relative, args, &mut commands)?;
    }

    Ok(commands)
}

/// Teilt die Argumentliste eines Buchstabens in Aufrufe fester Stelligkeit.
fn split_invocations(
    letter: char,
    position: usize,
    kind: CommandKind,
    relative: bool,
    args: Vec<f64>,
    commands: &mut Vec<Command>,
) -> Result<(), PathError> {
    let arity = kind.arity();

    if arity == 0 {
        if !args.is_empty() {
            return Err(PathError::BadArity {
                letter,
                position,
                arity,
                count: args.len(),
            });
        }
        commands.push(Command {
            kind,
            relative,
            args,
        });
        return Ok(());
    }

    if args.is_empty() || args.len() % arity != 0 {
        return Err(PathError::BadArity {
            letter,
            position,
            arity,
            count: args.len(),
        });
    }

    for (index, chunk) in args.chunks_exact(arity).enumerate() {
        // Implizite Folgepaare nach M sind Linien
        let kind = if kind == CommandKind::MoveTo && index > 0 {
            CommandKind::LineTo
        } else {
            kind
        };
        commands.push(Command {
            kind,
            relative,
            args: chunk.to_vec(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Letter {
        letter: char,
        position: usize,
        kind: CommandKind,
        relative: bool,
    },
    Number {
        position: usize,
    },
}

impl Token {
    fn position(&self) -> usize {
        match *self {
            Token::Letter { position, .. } | Token::Number { position } => position,
        }
    }
}

/// Zeichenweiser Scanner über den Eingabe-String.
struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn starts_number(b: u8) -> bool {
        b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+'
    }

    /// Liest das nächste Token; Zahlen werden nur gemeldet, nicht verbraucht.
    fn next_token(&mut self) -> Result<Option<Token>, PathError> {
        self.skip_separators();
        let Some(b) = self.peek() else {
            return Ok(None);
        };
        let position = self.pos;

        if Self::starts_number(b) {
            return Ok(Some(Token::Number { position }));
        }

        let character = self.text[position..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        match CommandKind::from_letter(character) {
            Some((kind, relative)) => {
                self.pos += 1;
                Ok(Some(Token::Letter {
                    letter: character,
                    position,
                    kind,
                    relative,
                }))
            }
            None => Err(PathError::UnexpectedCharacter {
                character,
                position,
            }),
        }
    }

    /// Liest eine Zahl, falls als nächstes eine folgt.
    fn next_number(&mut self) -> Result<Option<f64>, PathError> {
        self.skip_separators();
        match self.peek() {
            Some(b) if Self::starts_number(b) => self.scan_number().map(Some),
            _ => Ok(None),
        }
    }

    /// `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`
    fn scan_number(&mut self) -> Result<f64, PathError> {
        let start = self.pos;

        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }

        let int_digits = self.consume_digits();
        let mut frac_digits = 0;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            frac_digits = self.consume_digits();
        }

        if int_digits == 0 && frac_digits == 0 {
            return Err(self.invalid_number(start));
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.consume_digits() == 0 {
                return Err(self.invalid_number(start));
            }
        }

        let literal = &self.text[start..self.pos];
        literal
            .parse::<f64>()
            .map_err(|_| self.invalid_number(start))
    }

    fn consume_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn invalid_number(&self, start: usize) -> PathError {
        let end = self.pos.max(start + 1).min(self.text.len());
        PathError::InvalidNumber {
            literal: self.text[start..end].to_string(),
            position: start,
        }
    }
}
