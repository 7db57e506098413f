use alloc::string::String;

use vc_reflect::derive::{Reflect, reflect_constructors};

use super::{SourcePerson, person};
use crate::{MapErrorKind, MapTo, Mapper, map};

#[derive(Reflect, Clone, Debug)]
pub struct Profile {
    pub name: String,
    pub nickname: Option<String>,
    pub score: Option<i32>,
    pub age: i32,
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(default)]
pub struct ProfileDto {
    pub name: String,
    pub nickname: String,
    pub score: Option<i64>,
    pub age: Option<String>,
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct ProfileRecord {
    #[reflect(readonly)]
    pub name: String,
    #[reflect(readonly)]
    pub nickname: Option<String>,
}

#[reflect_constructors]
impl ProfileRecord {
    pub fn new(name: String, nickname: Option<String>) -> Self {
        Self { name, nickname }
    }
}

#[derive(Reflect, Clone, Debug)]
#[reflect(constructors)]
pub struct NicknameRecord {
    #[reflect(readonly)]
    pub nickname: String,
}

#[reflect_constructors]
impl NicknameRecord {
    pub fn new(nickname: String) -> Self {
        Self { nickname }
    }
}

fn profile(nickname: Option<&str>, score: Option<i32>) -> Profile {
    Profile {
        name: String::from("Bia"),
        nickname: nickname.map(String::from),
        score,
        age: 22,
    }
}

#[test]
fn present_values_are_unwrapped_and_wrapped() {
    let mut mapper = Mapper::new();
    let dto: ProfileDto = mapper.map(Some(&profile(Some("bi"), Some(7)))).unwrap().unwrap();
    assert_eq!(dto.nickname, "bi");
    assert_eq!(dto.score, Some(7));
    assert_eq!(dto.age.as_deref(), Some("22"));
    assert!(mapper.skipped().is_empty());
}

#[test]
fn absent_values_are_left_alone() {
    let mut mapper = Mapper::new();
    let dto: ProfileDto = mapper.map(Some(&profile(None, None))).unwrap().unwrap();
    assert_eq!(dto.name, "Bia");
    assert_eq!(dto.nickname, "");
    assert_eq!(dto.score, None);
    assert!(mapper.skipped().is_empty());
}

#[test]
fn absent_value_binds_an_optional_parameter() {
    let record: ProfileRecord = profile(None, None).map_to().unwrap();
    assert_eq!(record.name, "Bia");
    assert_eq!(record.nickname, None);

    let record: ProfileRecord = profile(Some("bi"), None).map_to().unwrap();
    assert_eq!(record.nickname.as_deref(), Some("bi"));
}

#[test]
fn absent_value_cannot_bind_a_required_parameter() {
    let err = map::<Profile, NicknameRecord>(Some(&profile(None, None))).unwrap_err();
    assert_eq!(err.kind(), MapErrorKind::NoViableConstructor);

    let record: NicknameRecord = profile(Some("bi"), None).map_to().unwrap();
    assert_eq!(record.nickname, "bi");
}

#[test]
fn optional_source_and_destination() {
    let present: Option<SourcePerson> = Some(person("Ana", 30));
    let absent: Option<SourcePerson> = None;

    let mapped: Option<ProfileDto> = map(Some(&present)).unwrap().unwrap();
    let dto = mapped.unwrap();
    assert_eq!(dto.name, "Ana");
    assert_eq!(dto.age.as_deref(), Some("30"));

    assert!(map::<_, ProfileDto>(Some(&absent)).unwrap().is_none());

    let err = absent.map_to::<ProfileDto>().unwrap_err();
    assert_eq!(err.kind(), MapErrorKind::NullSource);
}
