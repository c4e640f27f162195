use abi_method::{Abi, Method, Selector};
use pretty_assertions::assert_eq;

const TOKEN_ABI: &str = include_str!("fixtures/token.json");

fn token_abi() -> Abi {
    Abi::from_json(TOKEN_ABI).unwrap()
}

#[test]
fn functions_in_declaration_order() {
    let abi = token_abi();
    let signatures: Vec<_> = abi.methods().iter().map(Method::sig).collect();
    assert_eq!(
        signatures,
        [
            "balanceOf(address)",
            "transfer(address,uint256)",
            "transfer(address,uint256,bytes)",
            "fill((address,uint256)[])",
            "kill()",
        ]
    );
}

#[test]
fn declarations() {
    let abi = token_abi();
    let declarations: Vec<_> = abi.methods().iter().map(Method::to_string).collect();
    assert_eq!(
        declarations,
        [
            "function balanceOf(owner address) constant returns(uint256)",
            "function transfer(to address, value uint256) returns(success bool)",
            "function transfer(to address, value uint256, data bytes) returns()",
            "function fill(orders (address,uint256)[]) returns(filled uint256[])",
            "function kill() returns()",
        ]
    );
}

#[test]
fn overloads_are_kept() {
    let abi = token_abi();
    assert_eq!(abi.overloads("transfer").count(), 2);
    assert_eq!(
        abi.method("transfer").unwrap().sig(),
        "transfer(address,uint256)"
    );
    assert!(abi.method("Transfer").is_none());
}

#[test]
fn lookup_by_selector() {
    let abi = token_abi();
    let selector: Selector = "0xa9059cbb".parse().unwrap();
    let method = abi.method_by_selector(&selector).unwrap();
    assert_eq!(method.sig(), "transfer(address,uint256)");

    let kill = abi.method_by_selector(&Selector::new([0x41, 0xc0, 0xe1, 0xb5]));
    assert_eq!(kill.map(Method::name), Some("kill"));

    assert!(abi
        .method_by_selector(&Selector::new([0, 0, 0, 0]))
        .is_none());
}
