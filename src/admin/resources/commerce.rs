use axum::Router;
use uuid::Uuid;

use crate::{
    admin::{ResourceMeta, query::Timestamp},
    core::app_state::AppState,
    models::{
        CartEntity, CartItemEntity, CreateCartEntity, CreateCartItemEntity, CreateOrderEntity,
        CreateOrderItemEntity, CreateOrderStatusHistoryEntity, CreatePaymentEntity,
        CreatePaymentMethodEntity, OrderEntity, OrderItemEntity, OrderStatusHistoryEntity,
        PaymentEntity, PaymentMethodEntity, UpdateCartEntity, UpdateCartItemEntity,
        UpdateOrderEntity, UpdateOrderItemEntity, UpdateOrderStatusHistoryEntity,
        UpdatePaymentEntity, UpdatePaymentMethodEntity,
    },
};

admin_resource! {
    table: carts,
    id: i32,
    entity: CartEntity,
    title: "Carts",
    group: "Orders & payments",
    display: ["buyer_id", "created_at", "updated_at"],
    search: [],
    filters: [buyer_id: Uuid],
    ordering: [updated_at, created_at],
    default_order: updated_at desc,
    date_field: [updated_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateCartEntity, UpdateCartEntity)
}

admin_resource! {
    table: cart_items,
    id: i32,
    entity: CartItemEntity,
    title: "Cart items",
    group: "Orders & payments",
    display: ["product_id", "cart_id", "quantity", "unit_price", "total_price"],
    search: [notes],
    filters: [cart_id: i32, product_id: i32],
    ordering: [created_at, total_price],
    default_order: created_at desc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateCartItemEntity, UpdateCartItemEntity)
}

admin_resource! {
    table: orders,
    id: i32,
    entity: OrderEntity,
    title: "Orders",
    group: "Orders & payments",
    display: [
        "order_number", "buyer_id", "farmer_id", "status", "payment_status",
        "total_amount", "order_date", "expected_delivery_date",
    ],
    search: [order_number, tracking_number, special_instructions],
    filters: [status: String, payment_status: String, buyer_id: Uuid, farmer_id: i32],
    ordering: [order_date, created_at, expected_delivery_date, total_amount, order_number],
    default_order: order_date desc,
    date_field: [order_date: Timestamp],
    price_field: [total_amount],
    actions: [],
    relations: [],
    write: generic(CreateOrderEntity, UpdateOrderEntity)
}

admin_resource! {
    table: order_items,
    id: i32,
    entity: OrderItemEntity,
    title: "Order items",
    group: "Orders & payments",
    display: ["product_id", "order_id", "quantity", "unit_price", "total_price"],
    search: [],
    filters: [order_id: i32, product_id: i32],
    ordering: [id, total_price],
    default_order: id asc,
    date_field: [],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateOrderItemEntity, UpdateOrderItemEntity)
}

admin_resource! {
    table: order_status_history,
    id: i32,
    entity: OrderStatusHistoryEntity,
    title: "Order status history",
    group: "Orders & payments",
    display: ["new_status", "order_id", "previous_status", "changed_by_id", "timestamp"],
    search: [notes],
    filters: [order_id: i32, new_status: String, changed_by_id: Uuid],
    ordering: [timestamp],
    default_order: timestamp desc,
    date_field: [timestamp: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateOrderStatusHistoryEntity, UpdateOrderStatusHistoryEntity)
}

admin_resource! {
    table: payment_methods,
    id: i32,
    entity: PaymentMethodEntity,
    title: "Payment methods",
    group: "Orders & payments",
    display: ["name", "code", "is_active", "processing_fee_percentage", "minimum_amount"],
    search: [name, code],
    filters: [is_active: bool],
    ordering: [name, code],
    default_order: name asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreatePaymentMethodEntity, UpdatePaymentMethodEntity)
}

admin_resource! {
    table: payments,
    id: i32,
    entity: PaymentEntity,
    title: "Payments",
    group: "Orders & payments",
    display: ["transaction_id", "order_id", "payment_method_id", "amount", "status", "created_at"],
    search: [transaction_id, gateway_reference],
    filters: [status: String, payment_type: String, payment_method_id: i32, order_id: i32],
    ordering: [created_at, paid_at, amount],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [amount],
    actions: [],
    relations: [],
    write: generic(CreatePaymentEntity, UpdatePaymentEntity)
}

pub const RESOURCES: &[ResourceMeta] = &[
    carts::META,
    cart_items::META,
    orders::META,
    order_items::META,
    order_status_history::META,
    payment_methods::META,
    payments::META,
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(carts::routes())
        .merge(cart_items::routes())
        .merge(orders::routes())
        .merge(order_items::routes())
        .merge(order_status_history::routes())
        .merge(payment_methods::routes())
        .merge(payments::routes())
}
