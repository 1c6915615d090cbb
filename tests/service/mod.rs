mod employee;
