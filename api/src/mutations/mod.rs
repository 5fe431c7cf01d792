pub mod customer;
pub mod order;

// // Add your other ones here to create a unified Mutation object
// // e.x. Mutation(CustomerMutation, OrderMutation, OtherMutation)
#[derive(async_graphql::MergedObject, Default)]
pub struct Mutation(customer::Mutation, order::Mutation);
