use winnow::ascii::{dec_uint, space0};
use winnow::combinator::{alt, cut_err, opt, preceded};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{RelationalOp, Version};

fn ws(input: &mut &str) -> ModalResult<()> {
    space0.void().parse_next(input)
}

// -- Versions ---------------------------------------------------------------

fn number(input: &mut &str) -> ModalResult<u32> {
    dec_uint::<_, u32, _>
        .context(StrContext::Expected(StrContextValue::Description(
            "version number",
        )))
        .parse_next(input)
}

fn qualifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    })
    .parse_next(input)
}

// major[.minor[.micro[.qualifier]]]
fn version(input: &mut &str) -> ModalResult<Version> {
    let major = number.parse_next(input)?;
    let minor = opt(preceded('.', number)).parse_next(input)?;
    let micro = match minor {
        Some(_) => opt(preceded('.', number)).parse_next(input)?,
        None => None,
    };
    let qual = match micro {
        Some(_) => opt(preceded('.', qualifier)).parse_next(input)?,
        None => None,
    };

    let version = Version::new(major, minor.unwrap_or(0), micro.unwrap_or(0));
    Ok(match qual {
        Some(q) => version.with_qualifier(q),
        None => version,
    })
}

pub fn standalone_version(input: &mut &str) -> ModalResult<Version> {
    ws.parse_next(input)?;
    let v = version.parse_next(input)?;
    ws.parse_next(input)?;
    Ok(v)
}

// -- Predicates -------------------------------------------------------------

fn relational_op(input: &mut &str) -> ModalResult<RelationalOp> {
    alt((
        ">=".value(RelationalOp::Gte),
        ">".value(RelationalOp::Gt),
        "<=".value(RelationalOp::Lte),
        "<".value(RelationalOp::Lt),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "relational operator",
    )))
    .parse_next(input)
}

pub fn predicate(input: &mut &str) -> ModalResult<(RelationalOp, Version)> {
    ws.parse_next(input)?;
    let op = relational_op.parse_next(input)?;
    ws.parse_next(input)?;
    let operand = cut_err(version).parse_next(input)?;
    ws.parse_next(input)?;
    Ok((op, operand))
}
