use std::fmt;

use smallvec::SmallVec;

/// Uppercase HTTP method tokens a layer answers to. `GET` implies `HEAD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSet {
    methods: SmallVec<[Box<str>; 4]>,
}

impl MethodSet {
    pub fn new<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for method in methods {
            set.push(method.as_ref());
        }
        set
    }

    fn push(&mut self, method: &str) {
        let upper = method.to_ascii_uppercase();
        if self.contains(&upper) {
            return;
        }
        let is_get = upper == "GET";
        self.methods.push(upper.into_boxed_str());
        if is_get && !self.contains("HEAD") {
            self.methods.insert(0, "HEAD".into());
        }
    }

    fn contains(&self, upper: &str) -> bool {
        self.methods.iter().any(|m| &**m == upper)
    }

    pub fn allows(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| &**m)
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, method) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            f.write_str(method)?;
        }
        Ok(())
    }
}
