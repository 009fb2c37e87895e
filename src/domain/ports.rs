use crate::core::random::SeededRandom;
use crate::core::turtle::TurtleInterpreter;
use crate::domain::model::{Frame, RenderResult};
use crate::render::Renderer;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn rule_name(&self) -> &str;
    fn iterations(&self) -> usize;
    fn single_frame(&self) -> bool;
    fn output_path(&self) -> &str;
    /// Archive file name when frames are bundled, `None` for loose files.
    fn archive_name(&self) -> Option<&str>;
    fn seed(&self) -> Option<u64>;
    fn renderer(&self) -> Renderer;
    fn interpreter_for(&self, rule: &dyn LSystemRule) -> TurtleInterpreter;
}

/// An L-system: an axiom plus the productions that rewrite it.
pub trait LSystemRule: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn axiom(&self) -> String;

    /// Plain (D0L) productions keyed by symbol.
    fn production_rules(&self) -> HashMap<char, String> {
        HashMap::new()
    }

    /// Human readable productions, one `lhs -> rhs` line each.
    fn productions(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .production_rules()
            .into_iter()
            .map(|(symbol, replacement)| format!("{} -> {}", symbol, replacement))
            .collect();
        lines.sort();
        lines
    }

    fn is_parametric(&self) -> bool {
        false
    }

    /// Rewrites one symbol of a parametric system. `None` keeps the symbol as is.
    fn rewrite(
        &self,
        _symbol: char,
        _params: Option<&[&str]>,
        _rng: &mut SeededRandom,
    ) -> Option<String> {
        None
    }

    /// Turn used by `+` and `-`.
    fn angle_degrees(&self) -> f64 {
        25.0
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn generate(&self) -> Result<Vec<Frame>>;
    async fn render(&self, frames: Vec<Frame>) -> Result<RenderResult>;
    async fn load(&self, result: RenderResult) -> Result<String>;
}
