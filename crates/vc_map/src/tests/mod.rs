//! End-to-end mapping scenarios over derived types.

mod assign;
mod construct;
mod conversion;
mod optional;

use alloc::string::String;

use vc_reflect::derive::{Reflect, reflect_constructors};

// -----------------------------------------------------------------------------
// Shared models

#[derive(Reflect, Clone, Debug)]
pub struct SourcePerson {
    pub name: String,
    pub age: i32,
}

#[derive(Reflect, Clone, Debug)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

#[derive(Reflect, Clone, Debug, Default, PartialEq)]
#[reflect(default)]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

#[derive(Reflect, Clone, Debug)]
pub struct ComplexParameter {
    pub value: i32,
}

/// Only constructible from an attribute no source in these tests carries.
#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct ImpossibleDestination {
    #[reflect(readonly)]
    pub complex: ComplexParameter,
}

#[reflect_constructors]
impl ImpossibleDestination {
    pub fn new(complex: ComplexParameter) -> Self {
        Self { complex }
    }
}

fn person(name: &str, age: i32) -> SourcePerson {
    SourcePerson {
        name: String::from(name),
        age,
    }
}

fn address() -> Address {
    Address {
        street: String::from("Rua das Flores, 123"),
        city: String::from("São Paulo"),
        zip_code: String::from("01234-567"),
    }
}
