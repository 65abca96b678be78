mod scope_id;
