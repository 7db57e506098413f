use alloc::string::String;

use vc_reflect::derive::{Reflect, reflect_constructors};
use vc_reflect::info::Typed;
use vc_reflect::ops::DynamicStruct;

use super::{Address, AddressDto, ImpossibleDestination, SourcePerson, address, person};
use crate::{MapErrorKind, MapTo, Mapper, Strategy, map};

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct DestinationRecord {
    #[reflect(readonly)]
    pub name: String,
    #[reflect(readonly)]
    pub age: i32,
}

#[reflect_constructors]
impl DestinationRecord {
    pub fn new(name: String, age: i32) -> Self {
        Self { name, age }
    }
}

#[derive(Reflect, Clone, Debug)]
pub struct OrderedRecord {
    pub name: String,
    pub age: i32,
    pub position: String,
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct ReorderedRecord {
    #[reflect(readonly)]
    pub age: i32,
    #[reflect(readonly)]
    pub name: String,
    #[reflect(readonly)]
    pub position: String,
}

#[reflect_constructors]
impl ReorderedRecord {
    pub fn new(age: i32, name: String, position: String) -> Self {
        Self {
            age,
            name,
            position,
        }
    }
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct Contact {
    #[reflect(readonly)]
    pub name: String,
    #[reflect(readonly)]
    pub age: i32,
    #[reflect(readonly)]
    pub email: String,
    #[reflect(readonly)]
    pub origin: String,
}

#[reflect_constructors]
impl Contact {
    pub fn new(name: String, age: i32, email: String) -> Self {
        Self {
            name,
            age,
            email,
            origin: String::from("new"),
        }
    }

    pub fn named(name: String) -> Self {
        Self {
            name,
            age: 0,
            email: String::new(),
            origin: String::from("named"),
        }
    }
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct Subscriber {
    #[reflect(readonly)]
    pub name: String,
    #[reflect(readonly)]
    pub plan: String,
    #[reflect(readonly)]
    pub age: i32,
}

#[reflect_constructors]
impl Subscriber {
    pub fn new(
        name: String,
        #[reflect(default = String::from("free"))] plan: String,
        #[reflect(default)] age: i32,
    ) -> Self {
        Self { name, plan, age }
    }
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct Adult {
    #[reflect(readonly)]
    pub name: String,
    #[reflect(readonly)]
    pub age: i32,
    #[reflect(readonly)]
    pub origin: String,
}

#[reflect_constructors]
impl Adult {
    pub fn new(name: String, age: i32) -> Result<Self, String> {
        if age < 18 {
            return Err(format!("{name} is under age"));
        }
        Ok(Self {
            name,
            age,
            origin: String::from("new"),
        })
    }

    pub fn named(name: String) -> Self {
        Self {
            name,
            age: 18,
            origin: String::from("named"),
        }
    }
}

#[derive(Reflect, Clone, Debug)]
pub struct PersonWithAddress {
    pub name: String,
    pub address: Address,
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct PersonWithAddressRecord {
    #[reflect(readonly)]
    pub name: String,
    #[reflect(readonly)]
    pub address: AddressDto,
}

#[reflect_constructors]
impl PersonWithAddressRecord {
    pub fn new(name: String, address: AddressDto) -> Self {
        Self { name, address }
    }
}

#[test]
fn constructor_bound_by_name() {
    assert_eq!(
        Strategy::of(DestinationRecord::type_info()),
        Strategy::Construct
    );

    let record: DestinationRecord = person("Maria Santos", 28).map_to().unwrap();
    assert_eq!(record.name, "Maria Santos");
    assert_eq!(record.age, 28);
}

#[test]
fn parameter_order_follows_the_constructor() {
    let source = OrderedRecord {
        name: String::from("Carlos"),
        age: 41,
        position: String::from("Gerente"),
    };
    let record: ReorderedRecord = source.map_to().unwrap();
    assert_eq!(record.age, 41);
    assert_eq!(record.name, "Carlos");
    assert_eq!(record.position, "Gerente");
}

#[test]
fn highest_arity_wins_when_satisfiable() {
    let source = DynamicStruct::new()
        .with("name", String::from("Ana"))
        .with("age", 30_i32)
        .with("email", String::from("ana@example.com"));
    let contact: Contact = source.map_to().unwrap();
    assert_eq!(contact.origin, "new");
    assert_eq!(contact.email, "ana@example.com");
}

#[test]
fn falls_back_to_a_smaller_constructor() {
    let contact: Contact = person("Ana", 30).map_to().unwrap();
    assert_eq!(contact.origin, "named");
    assert_eq!(contact.name, "Ana");
    assert_eq!(contact.age, 0);
}

#[test]
fn unconvertible_argument_abandons_the_candidate() {
    let source = DynamicStruct::new()
        .with("name", String::from("Ana"))
        .with("age", String::from("thirty"))
        .with("email", String::from("ana@example.com"));
    let contact: Contact = source.map_to().unwrap();
    assert_eq!(contact.origin, "named");
}

#[test]
fn missing_optional_parameters_take_their_default() {
    let source = DynamicStruct::new().with("Name", String::from("Rui"));
    let subscriber: Subscriber = source.map_to().unwrap();
    assert_eq!(subscriber.name, "Rui");
    assert_eq!(subscriber.plan, "free");
    assert_eq!(subscriber.age, 0);

    let subscriber: Subscriber = person("Rui", 52).map_to().unwrap();
    assert_eq!(subscriber.age, 52);
}

#[test]
fn rejecting_constructor_is_abandoned() {
    let adult: Adult = person("Lia", 30).map_to().unwrap();
    assert_eq!(adult.origin, "new");

    let adult: Adult = person("Teo", 12).map_to().unwrap();
    assert_eq!(adult.origin, "named");
    assert_eq!(adult.age, 18);
}

#[test]
fn nested_argument_is_mapped_recursively() {
    let source = PersonWithAddress {
        name: String::from("Pedro"),
        address: address(),
    };
    let record: PersonWithAddressRecord = source.map_to().unwrap();
    assert_eq!(record.name, "Pedro");
    assert_eq!(record.address.street, "Rua das Flores, 123");
    assert_eq!(record.address.city, "São Paulo");
}

#[test]
fn no_viable_constructor() {
    let err = map::<SourcePerson, ImpossibleDestination>(Some(&person("Ana", 30))).unwrap_err();
    assert_eq!(err.kind(), MapErrorKind::NoViableConstructor);

    let message = err.to_string();
    assert!(message.contains("SourcePerson"));
    assert!(message.contains("ImpossibleDestination"));
}

#[test]
fn construction_records_nothing() {
    let mut mapper = Mapper::new();
    let record: Option<Contact> = mapper.map(Some(&person("Ana", 30))).unwrap();
    assert!(record.is_some());
    assert!(mapper.skipped().is_empty());
}
