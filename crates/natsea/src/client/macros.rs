/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// src/client/macros.rs
// nats_client! generates typed client structs over a ClientDispatcher.
//
//   nats_client! {
//       // OrderClient talks to the orders cluster.
//       pub struct OrderClient (connection = "orders") {
//           /// Announce a new order.
//           #[subject = "orders.created"]
//           pub async fn order_created(&self, order: Order);
//
//           #[subject = "orders.lookup"]
//           pub async fn lookup(&self, id: String) -> Order;
//       }
//   }
//
// Methods without a return type publish their argument. Methods with
// `-> R` send a request and decode the reply as Option<R>, where an
// empty reply is None. Without `(connection = ...)` the client uses
// the default connection.

#[macro_export]
macro_rules! nats_client {
    (@connection) => {
        ""
    };
    (@connection $connection:literal) => {
        $connection
    };

    (@method [] $(#[doc = $doc:literal])* $subject:literal
        $fn_vis:vis $method:ident $arg:ident $arg_ty:ty) => {
        $(#[doc = $doc])*
        $fn_vis async fn $method(
            &self,
            $arg: &$arg_ty,
        ) -> ::std::result::Result<(), $crate::errors::NatseaClientError> {
            self.dispatcher.publish($subject, $arg).await
        }
    };
    (@method [$ret:ty] $(#[doc = $doc:literal])* $subject:literal
        $fn_vis:vis $method:ident $arg:ident $arg_ty:ty) => {
        $(#[doc = $doc])*
        $fn_vis async fn $method(
            &self,
            $arg: &$arg_ty,
        ) -> ::std::result::Result<::std::option::Option<$ret>, $crate::errors::NatseaClientError>
        {
            self.dispatcher
                .request::<$arg_ty, $ret>($subject, $arg)
                .await
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $client:ident $( (connection = $connection:literal) )? {
            $(
                $(#[doc = $doc:literal])*
                #[subject = $subject:literal]
                $fn_vis:vis async fn $method:ident(&self, $arg:ident : $arg_ty:ty) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $client {
            dispatcher: $crate::client::ClientDispatcher,
        }

        impl $client {
            // CONNECTION is the connection name handed to
            // NatsConnections; the empty name is the default one.
            pub const CONNECTION: &'static str = $crate::nats_client!(@connection $($connection)?);

            pub fn new(dispatcher: $crate::client::ClientDispatcher) -> Self {
                Self { dispatcher }
            }

            pub fn from_connections(
                connections: &$crate::transport::NatsConnections,
                registry: ::std::sync::Arc<$crate::codec::CodecRegistry>,
            ) -> ::std::result::Result<Self, $crate::errors::NatseaClientError> {
                $crate::client::ClientDispatcher::from_connections(
                    connections,
                    Self::CONNECTION,
                    registry,
                )
                .map(Self::new)
            }

            pub fn dispatcher(&self) -> &$crate::client::ClientDispatcher {
                &self.dispatcher
            }

            $(
                $crate::nats_client!(
                    @method [$($ret)?] $(#[doc = $doc])* $subject
                    $fn_vis $method $arg $arg_ty
                );
            )*
        }
    };
}
