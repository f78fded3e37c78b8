//! Diesel schema for task persistence.

diesel::table! {
    /// Task records scoped to their owning user.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user.
        user_id -> Uuid,
        /// Task title.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Workflow status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
