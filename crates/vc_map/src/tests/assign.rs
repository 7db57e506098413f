use alloc::string::String;

use vc_reflect::derive::Reflect;
use vc_reflect::info::Typed;
use vc_reflect::ops::DynamicStruct;

use super::{Address, AddressDto, ImpossibleDestination, SourcePerson, address, person};
use crate::{MapError, MapErrorKind, MapTo, Mapper, SkipReason, Strategy, map};

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct DestinationPerson {
    pub name: String,
    pub age: i32,
}

#[derive(Reflect, Clone, Debug)]
pub struct PersonWithAddress {
    pub name: String,
    pub age: i32,
    pub address: Address,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct PersonWithAddressDto {
    pub name: String,
    pub age: i32,
    pub address: AddressDto,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct Employee {
    pub name: String,
    pub age: i32,
    pub department: String,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct Badge {
    pub name: String,
    #[reflect(readonly)]
    pub age: i32,
    #[reflect(ignore)]
    pub printed: bool,
}

#[derive(Reflect, Clone, Debug)]
pub struct Team {
    pub name: String,
    pub lead: SourcePerson,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct TeamDto {
    pub name: String,
    pub lead: Option<ImpossibleDestination>,
}

#[derive(Reflect, Clone, Debug)]
pub struct NoDefault {
    pub name: String,
}

#[test]
fn properties_copied_by_name() {
    assert_eq!(
        Strategy::of(DestinationPerson::type_info()),
        Strategy::Assign
    );

    let dto: DestinationPerson = person("João Silva", 30).map_to().unwrap();
    assert_eq!(dto.name, "João Silva");
    assert_eq!(dto.age, 30);
}

#[test]
fn absent_source_maps_to_none() {
    let dto = map::<SourcePerson, DestinationPerson>(None).unwrap();
    assert!(dto.is_none());
}

#[test]
fn nested_attribute_is_mapped_recursively() {
    let source = PersonWithAddress {
        name: String::from("Pedro Costa"),
        age: 45,
        address: address(),
    };
    let dto: PersonWithAddressDto = source.map_to().unwrap();
    assert_eq!(dto.name, "Pedro Costa");
    assert_eq!(dto.age, 45);
    assert_eq!(
        dto.address,
        AddressDto {
            street: String::from("Rua das Flores, 123"),
            city: String::from("São Paulo"),
            zip_code: String::from("01234-567"),
        }
    );
}

#[test]
fn anonymous_source_matches_ignoring_case() {
    let source = DynamicStruct::new()
        .with("Name", String::from("Carlos Oliveira"))
        .with("AGE", 28_i32)
        .with("department", String::from("TI"))
        .with("Salary", 4_200.0_f64);

    let employee: Employee = source.map_to().unwrap();
    assert_eq!(employee.name, "Carlos Oliveira");
    assert_eq!(employee.age, 28);
    assert_eq!(employee.department, "TI");
}

#[test]
fn readonly_and_ignored_attributes_stay_default() {
    let source = DynamicStruct::new()
        .with("name", String::from("Ana"))
        .with("age", 30_i32)
        .with("printed", true);

    let mut mapper = Mapper::new();
    let badge: Badge = mapper.map(Some(&source)).unwrap().unwrap();
    assert_eq!(badge.name, "Ana");
    assert_eq!(badge.age, 0);
    assert!(!badge.printed);
    assert!(mapper.skipped().is_empty());
}

#[test]
fn unconvertible_attribute_is_skipped_and_recorded() {
    let source = DynamicStruct::new()
        .with("name", String::from("Ana"))
        .with("age", String::from("thirty"));

    let mut mapper = Mapper::new();
    let dto: DestinationPerson = mapper.map(Some(&source)).unwrap().unwrap();
    assert_eq!(dto.name, "Ana");
    assert_eq!(dto.age, 0);

    let skipped = mapper.take_skipped();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].attribute, "age");
    assert!(matches!(
        skipped[0].reason,
        SkipReason::NotConvertible { target_type: "i32", .. }
    ));
    assert!(mapper.skipped().is_empty());
}

#[test]
fn failed_nested_mapping_is_recorded() {
    let source = Team {
        name: String::from("Core"),
        lead: person("Ana", 30),
    };

    let mut mapper = Mapper::new();
    let dto: TeamDto = mapper.map(Some(&source)).unwrap().unwrap();
    assert_eq!(dto.name, "Core");
    assert!(dto.lead.is_none());

    let [skipped] = mapper.skipped() else {
        panic!("expected one skipped attribute");
    };
    assert_eq!(skipped.attribute, "lead");
    let SkipReason::NestedMapping(err) = &skipped.reason else {
        panic!("expected a nested mapping failure");
    };
    assert!(matches!(**err, MapError::NoViableConstructor { .. }));
    assert!(skipped.to_string().contains("lead"));
}

#[test]
fn destination_without_parameterless_constructor() {
    let err = map::<SourcePerson, NoDefault>(Some(&person("Ana", 30))).unwrap_err();
    assert_eq!(err.kind(), MapErrorKind::NotDefaultConstructible);
    assert!(core::error::Error::source(&err).is_some());
}
