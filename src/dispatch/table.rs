//! Static operation table.
//!
//! One row per operation, one kernel column per precision in
//! [`Precision::index`] order: real32, real64, complex32, complex64.
//! Auditing or adding a combination is an edit to this table.
//!
//! [`Precision::index`]: crate::core::precision::Precision::index

use super::{ArgRole, ArgSpec, Mutation, OpDescriptor, Operation, Returns};
use crate::resolve::LengthRule;

const RO: ArgRole = ArgRole::ReadOnly;
const RW: ArgRole = ArgRole::ReadWrite;
const CW: ArgRole = ArgRole::CopyThenReturn;

const fn arg(name: &'static str, role: ArgRole) -> ArgSpec {
    ArgSpec { name, role }
}

pub static TABLE: [OpDescriptor; Operation::COUNT] = [
    OpDescriptor {
        op: Operation::Rotg,
        name: "rotg",
        kernels: [Some("srotg"), Some("drotg"), Some("crotg"), Some("zrotg")],
        args: &[],
        mutation: Mutation::None,
        returns: Returns::CosSin,
        length_rule: None,
    },
    OpDescriptor {
        op: Operation::Rotmg,
        name: "rotmg",
        kernels: [Some("srotmg"), Some("drotmg"), None, None],
        args: &[arg("param", ArgRole::OutputOnly)],
        mutation: Mutation::None,
        returns: Returns::Params,
        length_rule: None,
    },
    OpDescriptor {
        op: Operation::Rot,
        name: "rot",
        kernels: [Some("srot"), Some("drot"), Some("csrot"), Some("zdrot")],
        args: &[arg("x", CW), arg("y", CW)],
        mutation: Mutation::CopyThenReturn,
        returns: Returns::Vectors,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::RotInPlace,
        name: "rot_in_place",
        kernels: [Some("srot"), Some("drot"), Some("csrot"), Some("zdrot")],
        args: &[arg("x", RW), arg("y", RW)],
        mutation: Mutation::InPlace,
        returns: Returns::Unit,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Rotm,
        name: "rotm",
        kernels: [Some("srotm"), Some("drotm"), None, None],
        args: &[arg("x", CW), arg("y", CW)],
        mutation: Mutation::CopyThenReturn,
        returns: Returns::Vectors,
        length_rule: Some(LengthRule::Exclusive),
    },
    OpDescriptor {
        op: Operation::RotmInPlace,
        name: "rotm_in_place",
        kernels: [Some("srotm"), Some("drotm"), None, None],
        args: &[arg("x", RW), arg("y", RW)],
        mutation: Mutation::InPlace,
        returns: Returns::Unit,
        length_rule: Some(LengthRule::Exclusive),
    },
    OpDescriptor {
        op: Operation::Swap,
        name: "swap",
        kernels: [Some("sswap"), Some("dswap"), Some("cswap"), Some("zswap")],
        args: &[arg("x", RW), arg("y", RW)],
        mutation: Mutation::InPlace,
        returns: Returns::Unit,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Scal,
        name: "scal",
        kernels: [Some("sscal"), Some("dscal"), Some("cscal"), Some("zscal")],
        args: &[arg("x", RW)],
        mutation: Mutation::InPlace,
        returns: Returns::Unit,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::ScalReal,
        name: "scal_real",
        kernels: [None, None, Some("csscal"), Some("zdscal")],
        args: &[arg("x", CW)],
        mutation: Mutation::CopyThenReturn,
        returns: Returns::Vectors,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Copy,
        name: "copy",
        kernels: [Some("scopy"), Some("dcopy"), Some("ccopy"), Some("zcopy")],
        args: &[arg("x", RO), arg("y", RW)],
        mutation: Mutation::InPlace,
        returns: Returns::Unit,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Axpy,
        name: "axpy",
        kernels: [Some("saxpy"), Some("daxpy"), Some("caxpy"), Some("zaxpy")],
        args: &[arg("x", RO), arg("y", RW)],
        mutation: Mutation::InPlace,
        returns: Returns::Unit,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Dot,
        name: "dot",
        kernels: [Some("sdot"), Some("ddot"), None, None],
        args: &[arg("x", RO), arg("y", RO)],
        mutation: Mutation::None,
        returns: Returns::Scalar,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Dotu,
        name: "dotu",
        kernels: [None, None, Some("cdotu"), Some("zdotu")],
        args: &[arg("x", RO), arg("y", RO)],
        mutation: Mutation::None,
        returns: Returns::Scalar,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Dotc,
        name: "dotc",
        kernels: [None, None, Some("cdotc"), Some("zdotc")],
        args: &[arg("x", RO), arg("y", RO)],
        mutation: Mutation::None,
        returns: Returns::Scalar,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Nrm2,
        name: "nrm2",
        kernels: [Some("snrm2"), Some("dnrm2"), Some("scnrm2"), Some("dznrm2")],
        args: &[arg("x", RO)],
        mutation: Mutation::None,
        returns: Returns::RealScalar,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Asum,
        name: "asum",
        kernels: [Some("sasum"), Some("dasum"), Some("scasum"), Some("dzasum")],
        args: &[arg("x", RO)],
        mutation: Mutation::None,
        returns: Returns::RealScalar,
        length_rule: Some(LengthRule::Inclusive),
    },
    OpDescriptor {
        op: Operation::Iamax,
        name: "iamax",
        kernels: [Some("isamax"), Some("idamax"), Some("icamax"), Some("izamax")],
        args: &[arg("x", RO)],
        mutation: Mutation::None,
        returns: Returns::Index,
        length_rule: Some(LengthRule::Inclusive),
    },
];
