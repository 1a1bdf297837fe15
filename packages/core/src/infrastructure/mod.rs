//! Infrastructure 層
//!
//! ドメイン層が定義する trait の具体的な実装を置くレイヤー。

pub mod repository;
