// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod decode_error;
mod filter_decision_decoder;
mod secret_records_decoder;
mod statements_decoder;

pub use decode_error::*;
pub use filter_decision_decoder::*;
pub use secret_records_decoder::*;
pub use statements_decoder::*;
