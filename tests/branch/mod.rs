mod delete_branch;
