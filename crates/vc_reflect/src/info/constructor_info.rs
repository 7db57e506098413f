use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed};
use crate::ops::{ArgList, ConstructError};

/// Type-erased constructor body.
///
/// Takes the bound arguments in parameter order and returns the boxed value.
pub type ConstructorFn = fn(&mut ArgList) -> Result<Box<dyn Reflect>, ConstructError>;

// -----------------------------------------------------------------------------
// Constructors

/// The public constructors of a type.
///
/// Implemented by `#[reflect_constructors]` on an inherent `impl` block and
/// picked up by `#[derive(Reflect)]` through `#[reflect(constructors)]`.
pub trait Constructors {
    /// Constructors in declaration order.
    fn constructors() -> Vec<ConstructorInfo>;
}

// -----------------------------------------------------------------------------
// ParamInfo

/// A constructor parameter: name, declared type and an optional default.
#[derive(Clone)]
pub struct ParamInfo {
    name: &'static str,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    default: Option<fn() -> Box<dyn Reflect>>,
}

impl ParamInfo {
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            default: None,
        }
    }

    /// Makes the parameter optional, `default` produces its value when the
    /// source has no attribute with this name.
    #[inline]
    pub const fn with_default(mut self, default: fn() -> Box<dyn Reflect>) -> Self {
        self.default = Some(default);
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.default.is_some()
    }

    /// Creates the default value, if the parameter declares one.
    #[inline]
    pub fn default_value(&self) -> Option<Box<dyn Reflect>> {
        self.default.map(|default| default())
    }
}

impl fmt::Debug for ParamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("optional", &self.is_optional())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ConstructorInfo

/// A public constructor of a reflected type.
///
/// Published by `#[reflect_constructors]`, or by `#[reflect(default)]` for
/// the parameterless [`Default`] constructor.
#[derive(Clone)]
pub struct ConstructorInfo {
    ty: Type,
    name: &'static str,
    params: Box<[ParamInfo]>,
    func: ConstructorFn,
}

impl ConstructorInfo {
    crate::info::impl_type_fn!(ty);

    pub fn new<T: TypePath>(
        name: &'static str,
        params: impl Into<Vec<ParamInfo>>,
        func: ConstructorFn,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            params: params.into().into_boxed_slice(),
            func,
        }
    }

    /// The parameterless constructor backed by [`Default`].
    pub fn from_default<T: Default + Reflect + TypePath>() -> Self {
        fn construct<T: Default + Reflect>(
            _: &mut ArgList,
        ) -> Result<Box<dyn Reflect>, ConstructError> {
            Ok(Box::new(T::default()))
        }

        Self::new::<T>("default", Vec::new(), construct::<T>)
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn params(&self) -> &[ParamInfo] {
        &self.params
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Invokes the constructor.
    ///
    /// `args` must hold one value per parameter, in parameter order.
    pub fn invoke(&self, mut args: ArgList) -> Result<Box<dyn Reflect>, ConstructError> {
        if args.len() != self.params.len() {
            return Err(ConstructError::ArityMismatch {
                type_path: self.ty.path(),
                expected: self.params.len(),
                received: args.len(),
            });
        }
        (self.func)(&mut args)
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("ty", &self.ty)
            .field("name", &self.name)
            .field("params", &self.params)
            .finish()
    }
}
