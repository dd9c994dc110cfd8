//! Kernel dispatcher.
//!
//! Maps `(operation, precision)` to a kernel entry in the static [`TABLE`],
//! runs the parameter resolver with the operation's length rule, and applies
//! the operation's mutation policy through [`Dispatch::stage`]. The
//! dispatcher adds no failure modes of its own beyond reporting a combination
//! missing from the table.

use crate::config::{BinaryOpts, UnaryOpts};
use crate::core::precision::{Precision, PrecisionSet};
use crate::error::BlasError;
use crate::resolve::{self, LengthRule, Resolved};

pub mod table;
pub use table::TABLE;

/// Every operation exposed by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Rotg,
    Rotmg,
    Rot,
    RotInPlace,
    Rotm,
    RotmInPlace,
    Swap,
    Scal,
    ScalReal,
    Copy,
    Axpy,
    Dot,
    Dotu,
    Dotc,
    Nrm2,
    Asum,
    Iamax,
}

impl Operation {
    pub const COUNT: usize = 17;

    pub const ALL: [Operation; Operation::COUNT] = [
        Operation::Rotg,
        Operation::Rotmg,
        Operation::Rot,
        Operation::RotInPlace,
        Operation::Rotm,
        Operation::RotmInPlace,
        Operation::Swap,
        Operation::Scal,
        Operation::ScalReal,
        Operation::Copy,
        Operation::Axpy,
        Operation::Dot,
        Operation::Dotu,
        Operation::Dotc,
        Operation::Nrm2,
        Operation::Asum,
        Operation::Iamax,
    ];

    pub fn descriptor(self) -> &'static OpDescriptor {
        &TABLE[self as usize]
    }
}

/// How an operation treats one vector argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgRole {
    ReadOnly,
    ReadWrite,
    /// Copied first; the copy is modified and returned.
    CopyThenReturn,
    OutputOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub role: ArgRole,
}

/// Mutation policy of a whole operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// No caller buffer is written.
    None,
    /// Caller buffers are written directly.
    InPlace,
    /// Caller buffers are copied; the copies are written and returned.
    CopyThenReturn,
}

/// What an operation hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    Unit,
    Scalar,
    /// Real-typed scalar, also for complex input.
    RealScalar,
    /// Zero-based position.
    Index,
    /// The modified vector copies.
    Vectors,
    /// Rotation cosine and sine.
    CosSin,
    /// Five-element modified Givens descriptor.
    Params,
}

/// Static metadata for one operation.
#[derive(Debug)]
pub struct OpDescriptor {
    pub op: Operation,
    pub name: &'static str,
    /// Kernel entry per precision, indexed by [`Precision::index`].
    pub kernels: [Option<&'static str>; 4],
    pub args: &'static [ArgSpec],
    pub mutation: Mutation,
    pub returns: Returns,
    /// `None` for operations on scalars only.
    pub length_rule: Option<LengthRule>,
}

impl OpDescriptor {
    pub fn kernel(&self, precision: Precision) -> Option<&'static str> {
        self.kernels[precision.index()]
    }

    pub fn supported(&self) -> PrecisionSet {
        Precision::ALL
            .iter()
            .filter(|p| self.kernel(**p).is_some())
            .fold(PrecisionSet::empty(), |set, p| set | p.as_set())
    }
}

/// A selected kernel for one call.
#[derive(Debug, Clone, Copy)]
pub struct Dispatch {
    pub descriptor: &'static OpDescriptor,
    pub precision: Precision,
    pub kernel: &'static str,
}

/// Look up the kernel for `op` at `precision`.
pub fn select(op: Operation, precision: Precision) -> Result<Dispatch, BlasError> {
    let descriptor = op.descriptor();
    match descriptor.kernel(precision) {
        Some(kernel) => Ok(Dispatch { descriptor, precision, kernel }),
        None => Err(BlasError::UnsupportedPrecision { op: descriptor.name, precision }),
    }
}

impl Dispatch {
    fn length_rule(&self) -> LengthRule {
        self.descriptor.length_rule.unwrap_or(LengthRule::Inclusive)
    }

    fn rejected(&self, err: BlasError) -> BlasError {
        tracing::debug!(op = self.descriptor.name, kernel = self.kernel, error = %err, "argument validation failed");
        err
    }

    pub fn resolve_unary(&self, len: usize, opts: &UnaryOpts) -> Result<Resolved<1>, BlasError> {
        resolve::resolve_unary(self.length_rule(), len, opts).map_err(|e| self.rejected(e))
    }

    pub fn resolve_binary(&self, x_len: usize, y_len: usize, opts: &BinaryOpts) -> Result<Resolved<2>, BlasError> {
        resolve::resolve_binary(self.length_rule(), x_len, y_len, opts).map_err(|e| self.rejected(e))
    }

    /// Whether the kernel should run for `r`. `n == 0` skips it.
    pub fn begin<const N: usize>(&self, r: &Resolved<N>) -> bool {
        if r.is_noop() {
            tracing::trace!(op = self.descriptor.name, kernel = self.kernel, "n == 0, kernel skipped");
            return false;
        }
        tracing::debug!(
            op = self.descriptor.name,
            kernel = self.kernel,
            precision = %self.precision,
            n = r.n,
            mutation = ?self.descriptor.mutation,
            returns = ?self.descriptor.returns,
            "dispatch"
        );
        true
    }

    /// Entry for operations that take scalars only.
    pub fn begin_scalar(&self) {
        tracing::debug!(
            op = self.descriptor.name,
            kernel = self.kernel,
            precision = %self.precision,
            returns = ?self.descriptor.returns,
            "dispatch"
        );
    }

    /// Writable storage for argument `k`, chosen by its role in the table.
    ///
    /// Copy-then-return arguments are copied and the caller's buffer is left
    /// alone. Other arguments are written in place when the caller lent the
    /// buffer mutably; a shared buffer can only be written through a copy.
    pub fn stage<'a, T: Copy>(&self, k: usize, buf: Buffer<'a, T>) -> Staged<'a, T> {
        match (self.descriptor.args[k].role, buf) {
            (ArgRole::CopyThenReturn, buf) => Staged::Copied(buf.to_vec()),
            (_, Buffer::Exclusive(b)) => Staged::InPlace(b),
            (_, Buffer::Shared(b)) => Staged::Copied(b.to_vec()),
        }
    }
}

/// A caller buffer as lent to [`Dispatch::stage`].
#[derive(Debug)]
pub enum Buffer<'a, T> {
    Shared(&'a [T]),
    Exclusive(&'a mut [T]),
}

impl<T: Copy> Buffer<'_, T> {
    pub(crate) fn len(&self) -> usize {
        match self {
            Buffer::Shared(b) => b.len(),
            Buffer::Exclusive(b) => b.len(),
        }
    }

    fn to_vec(&self) -> Vec<T> {
        match self {
            Buffer::Shared(b) => b.to_vec(),
            Buffer::Exclusive(b) => b.to_vec(),
        }
    }
}

/// Storage a kernel writes into.
#[derive(Debug)]
pub enum Staged<'a, T> {
    /// The caller's own buffer.
    InPlace(&'a mut [T]),
    /// A private copy, returned to the caller afterwards.
    Copied(Vec<T>),
}

impl<T: Copy> Staged<'_, T> {
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Staged::InPlace(buf) => &mut **buf,
            Staged::Copied(buf) => buf.as_mut_slice(),
        }
    }

    /// The staged values as an owned vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Staged::InPlace(buf) => buf.to_vec(),
            Staged::Copied(buf) => buf,
        }
    }
}
