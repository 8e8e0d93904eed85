/// An error raised by the shell itself, 
/// as opposed to the ones coming from `grobner`.
#[derive(Debug, derive_more::Display)]
pub struct Error { 
    pub msg: String
}

impl std::error::Error for Error {}

macro_rules! err {
    ($($arg:tt)*) => {{
        use crate::app::err::*;
        let e = Error{ msg: format!($($arg)*) };
        Err( e.into() )
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};

#[cfg(test)]
mod tests { 
    fn check(n: i32) -> Result<i32, Box<dyn std::error::Error>> { 
        ensure!(n >= 0, "negative: {n}");
        Ok(n)
    }

    #[test]
    fn ensure() { 
        assert_eq!(check(3).ok(), Some(3));
        assert_eq!(check(-1).unwrap_err().to_string(), "negative: -1");
    }
}
