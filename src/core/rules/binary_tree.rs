use crate::domain::ports::LSystemRule;
use std::collections::HashMap;

/// `0` is a leaf, `F` a forward move, brackets are branching points.
#[derive(Debug, Clone)]
pub struct BinaryTree {
    productions: HashMap<char, String>,
}

impl BinaryTree {
    const AXIOM: &'static str = "0";

    pub fn new() -> Self {
        let mut productions = HashMap::new();
        productions.insert('0', "F[+F0]-F0".to_string());
        productions.insert('F', "FF".to_string());
        Self { productions }
    }
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LSystemRule for BinaryTree {
    fn name(&self) -> &str {
        "binary-tree"
    }

    fn description(&self) -> &str {
        "Simple binary tree. 0 represents leaves, F represents forward movements. \
         Brackets [ ] represent branching points."
    }

    fn axiom(&self) -> String {
        Self::AXIOM.to_string()
    }

    fn production_rules(&self) -> HashMap<char, String> {
        self.productions.clone()
    }
}
