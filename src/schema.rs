table! {
    appointments (aid) {
        aid -> Unsigned<Bigint>,
        pid -> Unsigned<Bigint>,
        date -> Date,
        time -> Time,
    }
}

table! {
    patients (pid) {
        pid -> Unsigned<Bigint>,
        name -> Char,
        email -> Char,
        dob -> Nullable<Date>,
        gender -> Char,
        contact -> Char,
        address -> Varchar,
    }
}

allow_tables_to_appear_in_same_query!(
    appointments,
    patients,
);
