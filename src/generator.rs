//! End-to-end growth pipeline: parse → rewrite → interpret → refresh.

use crate::error::GrowthError;
use crate::grammar;
use crate::interpreter::{Dialect, Interpreter, InterpreterConfig};
use crate::mesh::Mesh;

/// Configuration for one growth run.
#[derive(Clone, Debug)]
pub struct GrowthConfig {
    /// Command table the expanded string is read against.
    pub dialect: Dialect,

    /// Overrides the descriptor's iteration count when set.
    pub iterations_override: Option<usize>,

    /// Ceiling on the expanded string length. Rewriting grows the string
    /// multiplicatively per generation, so an unbounded run can exhaust
    /// memory long before interpretation starts.
    pub max_symbols: usize,

    /// Interpreter knobs (tessellation, branch-stack depth).
    pub interpreter: InterpreterConfig,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Basic,
            iterations_override: None,
            max_symbols: 1_000_000,
            interpreter: InterpreterConfig::default(),
        }
    }
}

/// Runs the whole pipeline over a descriptor and populates `mesh`.
///
/// Parses the descriptor, expands the axiom generation by generation,
/// interprets the result against `mesh`, then refreshes every derived
/// quantity with [`Mesh::update`]. Returns the final expanded symbol string
/// for diagnostics.
///
/// The transform is deterministic and performs no I/O; nothing is cached
/// between calls, so callers that want memoization keyed on the descriptor
/// and config own their own map. On error the mesh may hold geometry emitted
/// before the failure; its derived quantities are not refreshed.
pub fn grow(descriptor: &str, config: &GrowthConfig, mesh: &mut Mesh) -> Result<String, GrowthError> {
    let parsed = grammar::parse_descriptor(descriptor)?;
    let iterations = config.iterations_override.unwrap_or(parsed.iterations);

    let mut symbols = parsed.axiom.clone();
    for generation in 0..iterations {
        symbols = grammar::produce(&symbols, &parsed.rules);
        if symbols.len() > config.max_symbols {
            return Err(GrowthError::SymbolLimit {
                symbols: symbols.len(),
                limit: config.max_symbols,
            });
        }
        log::debug!("generation {}: {} symbols", generation + 1, symbols.len());
    }
    log::trace!("expanded symbol string: {symbols}");

    let mut interpreter =
        Interpreter::new(config.dialect, &parsed).with_config(config.interpreter.clone());
    interpreter.interpret(&symbols, mesh)?;
    mesh.update();
    log::info!(
        "grew {} vertices / {} faces from {} symbols",
        mesh.vertex_count(),
        mesh.face_count(),
        symbols.len()
    );
    Ok(symbols)
}
