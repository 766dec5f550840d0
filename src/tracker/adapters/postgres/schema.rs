//! Diesel schema for tracker persistence.

diesel::table! {
    /// Job applications, one row per tracked application.
    applications (id) {
        /// Application identifier.
        id -> Uuid,
        /// Owning user as issued by the identity provider.
        user_id -> Uuid,
        /// Company name.
        company -> Text,
        /// Role title.
        role -> Text,
        /// Optional location.
        location -> Nullable<Text>,
        /// Optional posting URL.
        url -> Nullable<Text>,
        /// Optional salary note.
        salary -> Nullable<Text>,
        /// Optional free-form notes.
        notes -> Nullable<Text>,
        /// Pipeline stage.
        #[max_length = 20]
        stage -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Follow-up tasks; rows cascade with their parent application.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Parent application identifier.
        application_id -> Uuid,
        /// Task title.
        title -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> applications (application_id));
diesel::allow_tables_to_appear_in_same_query!(applications, tasks);
