use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::info::{ConstructorInfo, ImplicitConversion, Type, TypePath};

// -----------------------------------------------------------------------------
// ScalarKind

/// Built-in value and text types that take part in generic coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    String,
}

impl ScalarKind {
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::U128
                | Self::Usize
        )
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    #[inline]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::String)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// OpaqueInfo

/// A type whose inner structure is not published.
///
/// Built-in library types are opaque. Scalars additionally carry their
/// [`ScalarKind`], which enables generic coercion into them.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    scalar: Option<ScalarKind>,
    constructors: Box<[ConstructorInfo]>,
    conversions: Box<[ImplicitConversion]>,
}

impl OpaqueInfo {
    crate::info::impl_type_fn!(ty);

    #[inline]
    pub fn new<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            scalar: None,
            constructors: Box::new([]),
            conversions: Box::new([]),
        }
    }

    #[inline]
    pub fn with_scalar(mut self, kind: ScalarKind) -> Self {
        self.scalar = Some(kind);
        self
    }

    pub fn with_constructors(mut self, constructors: impl Into<Vec<ConstructorInfo>>) -> Self {
        let mut list = Vec::from(core::mem::take(&mut self.constructors));
        list.extend(constructors.into());
        self.constructors = list.into_boxed_slice();
        self
    }

    pub fn with_conversions(mut self, conversions: impl Into<Vec<ImplicitConversion>>) -> Self {
        let mut list = Vec::from(core::mem::take(&mut self.conversions));
        list.extend(conversions.into());
        self.conversions = list.into_boxed_slice();
        self
    }

    #[inline]
    pub const fn scalar(&self) -> Option<ScalarKind> {
        self.scalar
    }

    #[inline]
    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    #[inline]
    pub fn conversions(&self) -> &[ImplicitConversion] {
        &self.conversions
    }
}
