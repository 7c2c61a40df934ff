// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Distortion command grammar.
//
// A command is a comma-separated list of tokens. The first token selects the
// operator, the rest are its parameters:
//
//   cosh,<step>,<amp>   cosv,<step>,<amp>   horizontal / vertical cosine shift
//   tanh,<step>,<amp>   tanv,<step>,<amp>   horizontal / vertical tangent shift
//   blky,<width>,<height>                   block flip
//   inv                                     invert

use std::num::{NonZeroU32, ParseFloatError, ParseIntError};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::ops::{Axis, Operator};

/// Why a command was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown distortion `{0}`")]
    UnknownKind(String),

    #[error("`{kind}` takes {expected} parameter(s), got {actual}; expected `{usage}`")]
    ParamCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
        usage: &'static str,
    },

    #[error("cannot parse {kind} {param} `{value}`: {source}")]
    InvalidFloat {
        kind: &'static str,
        param: &'static str,
        value: String,
        source: ParseFloatError,
    },

    #[error("{kind} {param} must be finite, got `{value}`")]
    NonFinite {
        kind: &'static str,
        param: &'static str,
        value: String,
    },

    #[error("cannot parse {kind} {param} `{value}`: {source}")]
    InvalidInteger {
        kind: &'static str,
        param: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("{kind} {param} must be a positive 32-bit integer, got `{value}`")]
    NonPositive {
        kind: &'static str,
        param: &'static str,
        value: String,
    },
}

/// Parse one command such as `cosh,0.12,6` or `blky,32,16`.
///
/// Whitespace around each token is trimmed, so `cosh, 0.12 ,6` is accepted.
/// Keywords are case-sensitive, and `nan` or `inf` parameters are rejected
/// as [`CommandError::NonFinite`].
pub fn parse_command(command: &str) -> Result<Operator, CommandError> {
    let tokens: Vec<&str> = command.split(',').map(str::trim).collect();
    let (kind, params) = match tokens.split_first() {
        Some((kind, params)) if !kind.is_empty() => (*kind, params),
        _ => return Err(CommandError::Empty),
    };

    match kind {
        "cosh" => wave(params, "cosh", "cosh,0.12,6.0").map(|(step, amplitude)| {
            Operator::CosineShift {
                axis: Axis::Horizontal,
                step,
                amplitude,
            }
        }),
        "cosv" => wave(params, "cosv", "cosv,0.07,6.0").map(|(step, amplitude)| {
            Operator::CosineShift {
                axis: Axis::Vertical,
                step,
                amplitude,
            }
        }),
        "tanh" => wave(params, "tanh", "tanh,0.12,6.0").map(|(step, amplitude)| {
            Operator::TangentShift {
                axis: Axis::Horizontal,
                step,
                amplitude,
            }
        }),
        "tanv" => wave(params, "tanv", "tanv,0.07,6.0").map(|(step, amplitude)| {
            Operator::TangentShift {
                axis: Axis::Vertical,
                step,
                amplitude,
            }
        }),
        "blky" => {
            expect_params(params, "blky", 2, "blky,32,16")?;
            Ok(Operator::BlockFlip {
                block_width: positive(params[0], "blky", "block-width")?,
                block_height: positive(params[1], "blky", "block-height")?,
            })
        }
        "inv" => {
            expect_params(params, "inv", 0, "inv")?;
            Ok(Operator::Invert)
        }
        other => Err(CommandError::UnknownKind(other.to_string())),
    }
}

impl FromStr for Operator {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_command(s)
    }
}

/// Parse every command in order, skipping (and logging) the ones that are
/// rejected.
pub fn parse_commands<I>(commands: I) -> Vec<Operator>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    commands
        .into_iter()
        .filter_map(|command| {
            let command = command.as_ref();
            match parse_command(command) {
                Ok(op) => {
                    debug!(command, %op, "Distortion command accepted");
                    Some(op)
                }
                Err(err) => {
                    warn!(command, error = %err, "Cannot parse distortion command");
                    None
                }
            }
        })
        .collect()
}

// -- Parameter helpers --------------------------------------------------------

fn expect_params(
    params: &[&str],
    kind: &'static str,
    expected: usize,
    usage: &'static str,
) -> Result<(), CommandError> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(CommandError::ParamCount {
            kind,
            expected,
            actual: params.len(),
            usage,
        })
    }
}

/// `<step>,<amplitude>` shared by the four wave shifts.
fn wave(
    params: &[&str],
    kind: &'static str,
    usage: &'static str,
) -> Result<(f64, f64), CommandError> {
    expect_params(params, kind, 2, usage)?;
    let step = finite(params[0], kind, "step-radian")?;
    let amplitude = finite(params[1], kind, "amp-value")?;
    Ok((step, amplitude))
}

fn finite(value: &str, kind: &'static str, param: &'static str) -> Result<f64, CommandError> {
    let parsed: f64 = value.parse().map_err(|source| CommandError::InvalidFloat {
        kind,
        param,
        value: value.to_string(),
        source,
    })?;
    if !parsed.is_finite() {
        return Err(CommandError::NonFinite {
            kind,
            param,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

fn positive(
    value: &str,
    kind: &'static str,
    param: &'static str,
) -> Result<NonZeroU32, CommandError> {
    let parsed: i64 = value.parse().map_err(|source| CommandError::InvalidInteger {
        kind,
        param,
        value: value.to_string(),
        source,
    })?;
    u32::try_from(parsed)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| CommandError::NonPositive {
            kind,
            param,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cosine_horizontal() {
        assert_eq!(
            parse_command("cosh,0.1,5").unwrap(),
            Operator::CosineShift {
                axis: Axis::Horizontal,
                step: 0.1,
                amplitude: 5.0,
            }
        );
    }

    #[test]
    fn parses_every_wave_kind() {
        let expected = [
            ("cosv,0.07,6", "cosv"),
            ("tanh,0.2,-4.5", "tanh"),
            ("tanv,1e-1,3", "tanv"),
        ];
        for (command, keyword) in expected {
            let op: Operator = command.parse().unwrap();
            assert_eq!(op.keyword(), keyword);
        }
        assert_eq!(
            parse_command("tanv,1e-1,3").unwrap(),
            Operator::TangentShift {
                axis: Axis::Vertical,
                step: 0.1,
                amplitude: 3.0,
            }
        );
    }

    #[test]
    fn parses_block_flip() {
        assert_eq!(
            parse_command("blky,4,4").unwrap(),
            Operator::BlockFlip {
                block_width: NonZeroU32::new(4).unwrap(),
                block_height: NonZeroU32::new(4).unwrap(),
            }
        );
    }

    #[test]
    fn parses_invert_and_tolerates_spaces() {
        assert_eq!(parse_command("inv").unwrap(), Operator::Invert);
        assert_eq!(
            parse_command(" cosh , 0.5 , 2 ").unwrap(),
            Operator::CosineShift {
                axis: Axis::Horizontal,
                step: 0.5,
                amplitude: 2.0,
            }
        );
    }

    #[test]
    fn rejects_missing_amplitude() {
        assert!(matches!(
            parse_command("cosh,0.1"),
            Err(CommandError::ParamCount {
                kind: "cosh",
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn rejects_extra_parameters() {
        assert!(matches!(
            parse_command("cosh,0.0,0.12,6.0"),
            Err(CommandError::ParamCount { actual: 3, .. })
        ));
        assert!(matches!(
            parse_command("inv,1"),
            Err(CommandError::ParamCount {
                kind: "inv",
                expected: 0,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_positive_block() {
        assert!(matches!(
            parse_command("blky,-1,4"),
            Err(CommandError::NonPositive {
                param: "block-width",
                ..
            })
        ));
        assert!(matches!(
            parse_command("blky,4,0"),
            Err(CommandError::NonPositive {
                param: "block-height",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_integer_block() {
        assert!(matches!(
            parse_command("blky,4.5,4"),
            Err(CommandError::InvalidInteger { .. })
        ));
        assert!(matches!(
            parse_command("blky,99999999999,4"),
            Err(CommandError::NonPositive { .. })
        ));
    }

    #[test]
    fn rejects_unknown_kind() {
        assert_eq!(
            parse_command("xyz,1,2"),
            Err(CommandError::UnknownKind("xyz".into()))
        );
        // Keywords are case-sensitive.
        assert!(matches!(
            parse_command("COSH,1,2"),
            Err(CommandError::UnknownKind(_))
        ));
    }

    #[test]
    fn rejects_bad_floats() {
        assert!(matches!(
            parse_command("tanh,abc,2"),
            Err(CommandError::InvalidFloat {
                param: "step-radian",
                ..
            })
        ));
        assert!(matches!(
            parse_command("cosv,0.1,NaN"),
            Err(CommandError::NonFinite {
                param: "amp-value",
                ..
            })
        ));
        assert!(matches!(
            parse_command("cosv,inf,1"),
            Err(CommandError::NonFinite { .. })
        ));
    }

    #[test]
    fn rejects_empty_command() {
        assert_eq!(parse_command(""), Err(CommandError::Empty));
        assert_eq!(parse_command(",1,2"), Err(CommandError::Empty));
    }

    #[test]
    fn parse_commands_skips_rejected() {
        let ops = parse_commands(["cosh,0.1,5", "xyz,1,2", "blky,-1,4", "inv", "cosh,0.1"]);
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].keyword(), "cosh");
        assert_eq!(ops[1], Operator::Invert);
    }

    #[test]
    fn display_round_trips_through_parser() {
        for command in ["cosh,0.16,6", "tanv,-0.3,2.5", "blky,32,16", "inv"] {
            let op = parse_command(command).unwrap();
            assert_eq!(op.to_string(), command);
        }
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = parse_command("blky,32").unwrap_err();
        assert_eq!(
            err.to_string(),
            "`blky` takes 2 parameter(s), got 1; expected `blky,32,16`"
        );
    }
}
