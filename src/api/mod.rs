// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod add_item;
pub mod delete_item;
pub mod errors;
pub mod generate_outfit;
pub mod http_server;

pub use add_item::{add_item_handler, AddItemRequest, AddItemResponse};
pub use delete_item::{delete_item_handler, DeleteItemResponse};
pub use errors::{ApiError, ErrorResponse};
pub use generate_outfit::{
    generate_outfit_handler, GenerateOutfitRequest, GenerateOutfitResponse, OutfitItem,
    OutfitPayload,
};
pub use http_server::{build_router, start_server, AppState};
