//! Side-effect-free oracles and intrinsic recognizers (§6 opcode utility
//! predicates).
//!
//! These are external in the sense that *what* classifies as side-effect
//! free is a judgment call made elsewhere (a class hierarchy analysis, an
//! annotation, a hardcoded allow-list of library methods); this crate only
//! consumes the verdict through the [`SideEffectOracle`] trait.

use crate::instr::{CallInsn, FieldOp, MethodRef};

/// Oracle consulted by the passes to answer "does invoking/allocating this
/// have observable side effects beyond its arguments?" and to recognize a
/// handful of library intrinsics that the stale-store and push-pop passes
/// special-case.
pub trait SideEffectOracle {
    /// `isSideEffectFreeCall`: the call neither throws (beyond propagating
    /// from its arguments), allocates observable memory, performs I/O, nor
    /// mutates reachable state.
    fn is_side_effect_free_call(&self, call: &CallInsn) -> bool;

    /// `isSideEffectFreeConstructorCall`: an `<init>` invocation on this
    /// constructor is side-effect free.
    fn is_side_effect_free_constructor_call(&self, call: &CallInsn) -> bool;

    /// `isNewForSideEffectFreeConstructor`: a `NEW` of this type is only
    /// ever paired with side-effect-free constructors that this oracle
    /// would also approve of.
    fn is_new_for_side_effect_free_constructor(&self, type_name: &str) -> bool;

    /// `isScalaUnbox`: a Scala-style unboxing call (throws
    /// `ClassCastException` on type mismatch, nothing else).
    fn is_scala_unbox(&self, call: &CallInsn) -> bool;

    /// `isJavaUnbox`: a `java.lang.Integer.intValue()`-style unboxing call
    /// (throws `NullPointerException` on a `null` receiver).
    fn is_java_unbox(&self, call: &CallInsn) -> bool;

    /// Used to pick the unboxed primitive's replacement cast target for
    /// [`SideEffectOracle::is_scala_unbox`] calls.
    fn boxed_type_of(&self, call: &CallInsn) -> MethodRef;

    /// `isRuntimeArrayLoadOrUpdate`: a runtime array-apply/update call whose
    /// type-dispatch collapses once fed a statically known array type,
    /// i.e. a consumer worth handing to the inliner after a class-tag
    /// `newArray` rewrite.
    fn is_runtime_array_load_or_update(&self, call: &CallInsn) -> bool;

    /// `isBoxedUnit`: the field holding the singleton boxed-`Unit` value.
    fn is_boxed_unit(&self, field: &MethodRef, op: FieldOp) -> bool;

    /// `isModuleLoad`: a `GETSTATIC` of a module's singleton instance field
    /// whose class initializer is on the configured skip-allowed list.
    fn is_module_load(&self, field: &MethodRef, op: FieldOp) -> bool;

    /// Recognizes `ClassTag(classOf[X]).newArray(n)` and extracts the
    /// element type `X`, if `call` is the `newArray` invocation of such a
    /// chain.
    fn class_tag_new_array_arg(&self, call: &CallInsn) -> Option<ClassTagNewArray>;
}

/// The statically-known element type and allocation-count producer behind a
/// recognized `ClassTag(classOf[X]).newArray(n)` call chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTagNewArray {
    pub element_type: alloc::string::String,
}

/// A conservative oracle that recognizes nothing as side-effect free and no
/// intrinsics: a safe default for embedders that have not wired up a real
/// class-hierarchy/annotation-backed oracle, and a convenient baseline for
/// tests that only want to assert on the handful of fixtures they opt in
/// via a custom oracle.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoneOracle;

impl SideEffectOracle for NoneOracle {
    fn is_side_effect_free_call(&self, _call: &CallInsn) -> bool {
        false
    }

    fn is_side_effect_free_constructor_call(&self, _call: &CallInsn) -> bool {
        false
    }

    fn is_new_for_side_effect_free_constructor(&self, _type_name: &str) -> bool {
        false
    }

    fn is_scala_unbox(&self, _call: &CallInsn) -> bool {
        false
    }

    fn is_java_unbox(&self, _call: &CallInsn) -> bool {
        false
    }

    fn boxed_type_of(&self, call: &CallInsn) -> MethodRef {
        call.target.clone()
    }

    fn is_runtime_array_load_or_update(&self, _call: &CallInsn) -> bool {
        false
    }

    fn is_boxed_unit(&self, _field: &MethodRef, _op: FieldOp) -> bool {
        false
    }

    fn is_module_load(&self, _field: &MethodRef, _op: FieldOp) -> bool {
        false
    }

    fn class_tag_new_array_arg(&self, _call: &CallInsn) -> Option<ClassTagNewArray> {
        None
    }
}
