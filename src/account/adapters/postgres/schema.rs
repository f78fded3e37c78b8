//! Diesel schema for account persistence.

diesel::table! {
    /// Registered users.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Encoded password hash.
        password_hash -> Text,
        /// Registration timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
