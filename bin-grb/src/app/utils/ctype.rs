use grobner::Ratio;

cfg_if::cfg_if! {
    if #[cfg(feature = "bigint")] {
        pub type Int = num_bigint::BigInt;
    } else if #[cfg(feature = "i128")] {
        pub type Int = i128;
    } else {
        pub type Int = i64;
    }
}

/// Coefficient field of the shell.
pub type R = Ratio<Int>;
