//! Canonical Kubernetes quantity strings.
//!
//! `k8s_openapi` carries quantities as opaque strings, so the canonical form
//! the API server would produce is computed here: memory is scaled in powers
//! of 1024 (`Ki`, `Mi`, ...), CPU millis in powers of 1000 (`m`, `k`, ...).

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

const BINARY_SUFFIXES: [&str; 7] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];

/// A byte count in binary SI form, e.g. `1073741824` is `1Gi`.
pub fn binary_quantity(bytes: i64) -> Quantity {
  // Small values read better as plain decimals.
  if bytes > -1024 && bytes < 1024 {
    return Quantity(decimal(bytes, 0));
  }

  let mut amount = bytes;
  let mut exponent = 0;
  while amount % 1024 == 0 && exponent < BINARY_SUFFIXES.len() - 1 {
    amount /= 1024;
    exponent += 1;
  }

  Quantity(format!("{}{}", amount, BINARY_SUFFIXES[exponent]))
}

/// A millicore count in decimal SI form, e.g. `500` is `500m` and `2000` is `2`.
pub fn milli_quantity(millis: i64) -> Quantity {
  Quantity(decimal(millis, -3))
}

fn decimal(mantissa: i64, exponent: i32) -> String {
  if mantissa == 0 {
    return "0".to_string();
  }

  let mut amount = mantissa;
  let mut exponent = exponent;
  while amount % 10 == 0 {
    amount /= 10;
    exponent += 1;
  }

  // Only multiples of three have a suffix. Multiplying back never overflows
  // since at least as many factors of ten were removed above.
  match exponent.rem_euclid(3) {
    1 => {
      amount *= 10;
      exponent -= 1;
    }
    2 => {
      amount *= 100;
      exponent -= 2;
    }
    _ => {}
  }

  match decimal_suffix(exponent) {
    Some(suffix) => format!("{}{}", amount, suffix),
    None => format!("{}e{}", amount, exponent),
  }
}

fn decimal_suffix(exponent: i32) -> Option<&'static str> {
  let suffix = match exponent {
    -9 => "n",
    -6 => "u",
    -3 => "m",
    0 => "",
    3 => "k",
    6 => "M",
    9 => "G",
    12 => "T",
    15 => "P",
    18 => "E",
    _ => return None,
  };

  Some(suffix)
}
