#[derive(PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum BindingPower {
    Default,
    Literal,
    Additive,
    Multiplicative,
    Prefix,
}
