/// Chained construction of L-system strings.
///
/// `build()` hands back the accumulated string and clears the buffer, so one
/// builder can be reused across productions.
#[derive(Debug, Default, Clone)]
pub struct LStringBuilder {
    current: String,
}

impl LStringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbol(&mut self, symbol: char) -> &mut Self {
        self.current.push(symbol);
        self
    }

    /// Appends `symbol(p1,p2,...)`. With no parameters this is `symbol`.
    pub fn symbol_with<S: AsRef<str>>(&mut self, symbol: char, params: &[S]) -> &mut Self {
        if params.is_empty() {
            return self.symbol(symbol);
        }

        self.current.push(symbol);
        self.current.push('(');
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.current.push(',');
            }
            self.current.push_str(param.as_ref());
        }
        self.current.push(')');
        self
    }

    pub fn branch(&mut self, close: bool) -> &mut Self {
        self.symbol(if close { ']' } else { '[' })
    }

    pub fn forward(&mut self) -> &mut Self {
        self.symbol('F')
    }

    pub fn forward_by(&mut self, distance: &str) -> &mut Self {
        self.symbol_with('F', &[distance])
    }

    pub fn leaf(&mut self) -> &mut Self {
        self.symbol('0')
    }

    pub fn turn_left(&mut self) -> &mut Self {
        self.symbol('+')
    }

    pub fn turn_right(&mut self) -> &mut Self {
        self.symbol('-')
    }

    pub fn open_branch(&mut self) -> &mut Self {
        self.branch(false)
    }

    pub fn close_branch(&mut self) -> &mut Self {
        self.branch(true)
    }

    pub fn build(&mut self) -> String {
        std::mem::take(&mut self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_branching_string() {
        let mut builder = LStringBuilder::new();
        let s = builder
            .forward_by("10")
            .open_branch()
            .turn_left()
            .forward_by("5")
            .leaf()
            .close_branch()
            .turn_right()
            .forward()
            .build();
        assert_eq!(s, "F(10)[+F(5)0]-F");
    }

    #[test]
    fn test_build_clears_buffer() {
        let mut builder = LStringBuilder::new();
        assert_eq!(builder.leaf().build(), "0");
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn test_symbol_with_multiple_and_empty_params() {
        let mut builder = LStringBuilder::new();
        assert_eq!(builder.symbol_with('A', &["1", "-2"]).build(), "A(1,-2)");
        let none: [&str; 0] = [];
        assert_eq!(builder.symbol_with('A', &none).build(), "A");
    }
}
