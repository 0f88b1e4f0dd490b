#![allow(clippy::excessive_precision, clippy::float_cmp, dead_code)]

extern crate alloc;

#[path = "../src/lexical/mod.rs"]
mod lexical;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

fn std_parse<F: std::str::FromStr>(digits: &[u8], exponent: i32) -> F
where
    F::Err: std::fmt::Debug,
{
    let digits = std::str::from_utf8(digits).unwrap();
    format!("{}e{}", digits, exponent).parse().unwrap()
}

#[quickcheck]
fn f64_short_mantissa(mantissa: u64, exponent: i16) -> bool {
    let exponent = i32::from(exponent % 360);
    let digits = mantissa.to_string();
    lexical::parse_float::<f64>(digits.as_bytes(), exponent) == std_parse(digits.as_bytes(), exponent)
}

#[quickcheck]
fn f32_short_mantissa(mantissa: u32, exponent: i8) -> bool {
    let exponent = i32::from(exponent % 50);
    let digits = mantissa.to_string();
    lexical::parse_float::<f32>(digits.as_bytes(), exponent) == std_parse(digits.as_bytes(), exponent)
}

#[test]
fn long_mantissa() {
    fn prop(raw: Vec<u8>, exponent: i16) -> bool {
        let mut digits: Vec<u8> = raw.iter().map(|d| b'0' + d % 10).collect();
        if digits.is_empty() {
            digits.push(b'0');
        }
        let exponent = i32::from(exponent % 400);
        let expected: f64 = std_parse(&digits, exponent);
        let narrow: f32 = std_parse(&digits, exponent);
        lexical::parse_float::<f64>(&digits, exponent) == expected
            && lexical::parse_float::<f32>(&digits, exponent) == narrow
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Vec<u8>, i16) -> bool);
}

#[test]
fn halfway_between_subnormals() {
    // Halfway between the two smallest positive subnormals, 1.5 * 2^-1074,
    // needs every one of its significant digits to round correctly.
    let halfway = "7410984687618698162648531893023320585475897039214871466383785237\
                   5101326090531312779794975454245398856969484704316857659638998506\
                   5533909694598162194016172817189451069785467106791768725751773473\
                   1555330779540854980960845750095811137303474765809687100959097544\
                   2271004757307809711118935784838675653998783503015228055934046593\
                   7397917907387238682993958184816601691220194564999312897984113620\
                   6248449867871357218035220901702390328579173252022052897402080290\
                   6854021606612375549983402671300035812486479041385743401875520901\
                   5901725925471462961751341597749387185747378709616456389087181198\
                   4127167305601704549300470526959016576377688490826798697257336652\
                   1765567941072508764337560846003984904972149117463085539556354188\
                   641513168478436313080237596295773983001708984375";
    let digits: Vec<u8> = halfway.bytes().filter(u8::is_ascii_digit).collect();
    let exponent = -(digits.len() as i32) - 323;
    assert_eq!(lexical::parse_float::<f64>(&digits, exponent), std_parse(&digits, exponent));

    let mut above = digits.clone();
    above.extend(std::iter::repeat(b'0').take(300));
    above.push(b'1');
    let exponent = -(above.len() as i32) - 323;
    assert_eq!(lexical::parse_float::<f64>(&above, exponent), std_parse(&above, exponent));
}
