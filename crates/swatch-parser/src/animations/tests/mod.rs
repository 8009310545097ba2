use super::*;
pub(super) use swatch_core::AnimationToken;


const SAMPLE: &str = include_str!("../../../tests/fixtures/sample.css");

fn find_by_name<'a>(animations: &'a [AnimationToken], name: &str) -> &'a AnimationToken {
    animations.iter().find(|a| a.name == name).unwrap_or_else(|| {
        let names: Vec<_> = animations.iter().map(|a| &a.name).collect();
        panic!("should find animation named '{name}', available: {names:?}")
    })
}
