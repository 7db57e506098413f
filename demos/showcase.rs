//! Walks the main mapping scenarios and prints what each one produces.

use vc_mapper::domain::CompleteName;
use vc_mapper::prelude::*;

// -----------------------------------------------------------------------------
// Models

#[derive(Reflect, Clone, Debug)]
pub struct SourcePerson {
    pub name: String,
    pub age: i32,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct DestinationPerson {
    pub name: String,
    pub age: i32,
}

#[derive(Reflect, Clone, Debug)]
pub struct SourceRecord {
    pub name: String,
    pub age: i32,
}

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
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub zip_code: String,
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
pub struct PersonWithAddressDtoAgeDiff {
    pub name: String,
    pub age: String,
    pub address: AddressDto,
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

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct PersonWithStringName {
    pub name: String,
    pub age: i32,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct Employee {
    pub name: String,
    pub age: i32,
    pub department: String,
}

#[derive(Reflect, Clone, Debug)]
pub struct ProductSource {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct ProductRecord {
    #[reflect(readonly)]
    pub id: i64,
    #[reflect(readonly)]
    pub name: String,
    #[reflect(readonly)]
    pub price: f64,
    #[reflect(readonly)]
    pub stock: u32,
}

#[reflect_constructors]
impl ProductRecord {
    pub fn new(id: i64, name: String, price: f64, stock: u32) -> Self {
        Self {
            id,
            name,
            price,
            stock,
        }
    }
}

#[derive(Reflect, Clone, Debug)]
pub struct ComplexParameter {
    pub value: i32,
}

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

// -----------------------------------------------------------------------------
// Scenarios

fn section(title: &str) {
    println!();
    println!("== {title}");
}

fn address() -> Address {
    Address {
        street: "Rua das Flores, 123".into(),
        city: "São Paulo".into(),
        zip_code: "01234-567".into(),
    }
}

fn main() -> Result<(), MapError> {
    section("Class to class");
    let person = SourcePerson {
        name: "João Silva".into(),
        age: 30,
    };
    let dto: DestinationPerson = person.map_to()?;
    println!("{person:?}\n  -> {dto:?}");

    section("Record to record");
    let record = SourceRecord {
        name: "Maria Santos".into(),
        age: 28,
    };
    let mapped: DestinationRecord = record.map_to()?;
    println!("{record:?}\n  -> {mapped:?}");

    section("Reordered constructor parameters");
    let ordered = OrderedRecord {
        name: "Carlos".into(),
        age: 41,
        position: "Gerente".into(),
    };
    let reordered: ReorderedRecord = ordered.map_to()?;
    println!("{ordered:?}\n  -> {reordered:?}");

    section("Nested object");
    let nested = PersonWithAddress {
        name: "Pedro Costa".into(),
        age: 45,
        address: address(),
    };
    let nested_dto: PersonWithAddressDto = nested.map_to()?;
    println!("{nested:?}\n  -> {nested_dto:?}");

    section("Number to text");
    let age_diff: PersonWithAddressDtoAgeDiff = nested.map_to()?;
    println!("age {} -> {:?}", nested.age, age_diff.age);

    section("Value object to text");
    let named = PersonWithCompleteName::new(CompleteName::new("Ana Paula Souza".into()), 33);
    let plain: PersonWithStringName = named.map_to()?;
    println!("{} -> {:?}", named.name, plain.name);

    section("Text to value object");
    let back: PersonWithCompleteName = plain.map_to()?;
    println!(
        "{:?} -> first: {}, last: {}, valid: {}",
        plain.name,
        back.name.first_name(),
        back.name.last_name(),
        back.name.is_valid()
    );

    section("Anonymous object");
    let anonymous = DynamicStruct::new()
        .with("Name", String::from("Carlos Oliveira"))
        .with("Age", 28_i32)
        .with("Department", String::from("TI"));
    let employee: Employee = anonymous.map_to()?;
    println!("{employee:?}");

    section("Product record");
    let product = ProductSource {
        id: 7,
        name: "Notebook".into(),
        price: 4_599.9,
        stock: 12,
    };
    let product_record: ProductRecord = product.map_to()?;
    println!("{product:?}\n  -> {product_record:?}");

    section("No viable constructor");
    match person.map_to::<ImpossibleDestination>() {
        Ok(value) => println!("unexpected: {value:?}"),
        Err(err) => println!("{err}"),
    }

    section("Skipped attributes");
    let mut mapper = Mapper::new();
    let partial = DynamicStruct::new()
        .with("name", String::from("Bia"))
        .with("age", String::from("twenty"));
    let dto: Option<DestinationPerson> = mapper.map(Some(&partial))?;
    println!("{dto:?}");
    for skipped in mapper.skipped() {
        println!("  {skipped}");
    }

    Ok(())
}
