//! PyO3 wrapper for Engine

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::checkpoint;
use crate::rng::Engine as RustEngine;

/// Python wrapper for the Rust engine
///
/// # Example (from Python)
///
/// ```python
/// from chi_rng import Engine
///
/// e = Engine(42)
/// x = e.next64()
/// order = e.permute(10)
/// saved = e.save()
/// assert Engine.load(saved).next64() == e.next64()
/// ```
#[pyclass(name = "Engine")]
pub struct PyEngine {
    inner: RustEngine,
}

#[pymethods]
impl PyEngine {
    /// Create an engine, optionally seeded with one word.
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(s) => RustEngine::with_seed(s),
            None => RustEngine::new(),
        };
        PyEngine { inner }
    }

    fn put(&mut self, word: u64) {
        self.inner.put(word)
    }

    fn next64(&mut self) -> u64 {
        self.inner.next64()
    }

    fn reset(&mut self) {
        self.inner.reset()
    }

    fn randomize(&mut self) {
        self.inner.randomize()
    }

    fn modn(&mut self, n: u64) -> u64 {
        self.inner.modn(n)
    }

    /// Random permutation of `range(n)` as a list.
    fn permute(&mut self, n: usize) -> Vec<u32> {
        let mut out = vec![0u32; n];
        self.inner.permute(&mut out);
        out
    }

    /// `n` random bytes.
    fn fill<'py>(&mut self, py: Python<'py>, n: usize) -> Bound<'py, PyBytes> {
        let mut buf = vec![0u8; n];
        self.inner.fill(&mut buf);
        PyBytes::new_bound(py, &buf)
    }

    fn one(&mut self) -> f64 {
        self.inner.one()
    }

    fn one_r(&mut self) -> f64 {
        self.inner.one_r()
    }

    fn two(&mut self) -> f64 {
        self.inner.two()
    }

    fn two_r(&mut self) -> f64 {
        self.inner.two_r()
    }

    fn tri(&mut self) -> f64 {
        self.inner.tri()
    }

    fn exp(&mut self) -> f64 {
        self.inner.exp()
    }

    fn normal(&mut self) -> (f64, f64) {
        self.inner.normal()
    }

    /// Serialize state to a JSON snapshot string.
    fn save(&self) -> PyResult<String> {
        checkpoint::save(&self.inner).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Restore an engine from a snapshot produced by `save`.
    #[staticmethod]
    fn load(snapshot: &str) -> PyResult<Self> {
        let inner = checkpoint::load(snapshot)
            .map_err(|e| PyValueError::new_err(format!("Failed to load snapshot: {}", e)))?;
        Ok(PyEngine { inner })
    }
}
