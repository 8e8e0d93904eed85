use std::sync::OnceLock;
use bimap::BiMap;
use regex::Regex;
use crate::Error;

/// Names of the variables, indexed by position. 
/// Unnamed positions are shown as `x1, x2, ...`.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Vars { 
    names: BiMap<usize, String>
}

fn name_regex() -> &'static Regex { 
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z]+[0-9]*$").unwrap())
}

impl Vars { 
    pub fn new<I, S>(names: I) -> Result<Self, Error>
    where I: IntoIterator<Item = S>, S: AsRef<str> { 
        let mut map = BiMap::new();
        for (i, name) in names.into_iter().enumerate() { 
            let name = name.as_ref();
            if !name_regex().is_match(name) { 
                return Err(Error::InvalidVariableName(name.to_string()))
            }
            if map.insert_no_overwrite(i, name.to_string()).is_err() { 
                return Err(Error::DuplicateVariableName(name.to_string()))
            }
        }
        Ok(Self { names: map })
    }

    pub fn len(&self) -> usize { 
        self.names.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.names.is_empty()
    }

    pub fn name(&self, i: usize) -> String { 
        match self.names.get_by_left(&i) { 
            Some(name) => name.clone(),
            None => format!("x{}", i + 1)
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> { 
        self.names.get_by_right(name).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> { 
        (0..self.len()).filter_map(|i| self.names.get_by_left(&i).map(|s| s.as_str()))
    }
}
