use alloc::string::String;

use vc_domain::CompleteName;
use vc_reflect::derive::{Reflect, reflect_constructors};

use super::{Address, AddressDto, address};
use crate::{MapTo, Mapper};

#[derive(Reflect, Clone, Debug)]
pub struct PersonWithAddress {
    pub name: String,
    pub age: i32,
    pub address: Address,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct PersonWithAddressDtoAgeDiff {
    pub name: String,
    pub age: String,
    pub address: AddressDto,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct PersonWithTypedAge {
    pub name: String,
    pub age: i32,
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct PersonWithCompleteName {
    #[reflect(readonly)]
    pub name: CompleteName,
    #[reflect(readonly)]
    pub age: i32,
}

#[reflect_constructors]
impl PersonWithCompleteName {
    pub fn new(name: CompleteName, age: i32) -> Self {
        Self { name, age }
    }
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct PersonWithCompleteNameDto {
    #[reflect(readonly)]
    pub name: CompleteName,
    #[reflect(readonly)]
    pub age: i32,
}

#[reflect_constructors]
impl PersonWithCompleteNameDto {
    pub fn new(name: CompleteName, age: i32) -> Self {
        Self { name, age }
    }
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct PersonWithStringName {
    pub name: String,
    pub age: i32,
}

#[derive(Reflect, Clone, Debug)]
pub struct SourceWithNumbers {
    pub int_value: i32,
    pub long_value: i64,
    pub double_value: f64,
    pub string_value: String,
    pub flag: bool,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct DestinationWithNumbers {
    pub int_value: i64,
    pub long_value: i32,
    pub double_value: f32,
    pub string_value: i32,
    pub flag: String,
}

fn complete_name_person() -> PersonWithCompleteName {
    PersonWithCompleteName::new(CompleteName::new(String::from("João da Silva")), 35)
}

#[test]
fn number_becomes_text() {
    let source = PersonWithAddress {
        name: String::from("Pedro"),
        age: 35,
        address: address(),
    };
    let dto: PersonWithAddressDtoAgeDiff = source.map_to().unwrap();
    assert_eq!(dto.age, "35");
    assert_eq!(dto.address.city, "São Paulo");
}

#[test]
fn text_becomes_number() {
    let source = PersonWithAddressDtoAgeDiff {
        name: String::from("Pedro"),
        age: String::from(" 35 "),
        address: AddressDto::default(),
    };
    let mut mapper = Mapper::new();
    let dto: PersonWithTypedAge = mapper.map(Some(&source)).unwrap().unwrap();
    assert_eq!(dto.age, 35);
    assert!(mapper.skipped().is_empty());
}

#[test]
fn value_object_is_carried_over() {
    let dto: PersonWithCompleteNameDto = complete_name_person().map_to().unwrap();
    assert_eq!(dto.name.full_name(), "João da Silva");
    assert_eq!(dto.name.first_name(), "João");
    assert_eq!(dto.name.last_name(), "Silva");
    assert_eq!(dto.age, 35);
}

#[test]
fn value_object_converts_to_text() {
    let dto: PersonWithStringName = complete_name_person().map_to().unwrap();
    assert_eq!(dto.name, "João da Silva");
    assert_eq!(dto.age, 35);
}

#[test]
fn text_converts_to_value_object() {
    let source = PersonWithStringName {
        name: String::from("Maria Souza"),
        age: 29,
    };
    let person: PersonWithCompleteName = source.map_to().unwrap();
    assert_eq!(person.name, CompleteName::from_parts("Maria".into(), "Souza".into()));
    assert!(person.name.is_valid());
    assert_eq!(person.age, 29);
}

#[test]
fn numeric_coercions() {
    let source = SourceWithNumbers {
        int_value: 42,
        long_value: 1_234_567,
        double_value: 2.75,
        string_value: String::from("123"),
        flag: true,
    };

    let mut mapper = Mapper::new();
    let dto: DestinationWithNumbers = mapper.map(Some(&source)).unwrap().unwrap();
    assert_eq!(dto.int_value, 42);
    assert_eq!(dto.long_value, 1_234_567);
    assert_eq!(dto.double_value, 2.75);
    assert_eq!(dto.string_value, 123);
    assert_eq!(dto.flag, "true");
    assert!(mapper.skipped().is_empty());
}

#[test]
fn out_of_range_number_is_skipped() {
    let source = SourceWithNumbers {
        int_value: 0,
        long_value: i64::MAX,
        double_value: 0.0,
        string_value: String::from("12a"),
        flag: false,
    };

    let mut mapper = Mapper::new();
    let dto: DestinationWithNumbers = mapper.map(Some(&source)).unwrap().unwrap();
    assert_eq!(dto.long_value, 0);
    assert_eq!(dto.string_value, 0);

    let skipped: Vec<&str> = mapper.skipped().iter().map(|skip| skip.attribute).collect();
    assert_eq!(skipped, ["long_value", "string_value"]);
}
